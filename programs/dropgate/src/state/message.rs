use anchor_lang::prelude::*;
use solana_program::keccak;
use solana_program::secp256k1_recover::secp256k1_recover;

/// Address the backend signing key recovers to: the trailing 20 bytes of
/// keccak256 over the uncompressed secp256k1 public key.
pub type EthAddress = [u8; 20];

/// Scheme tags hashed in front of every claim message.
/// Prevents a digest signed for one scheme from verifying under another.
const SIGNED_POINTS_TAG: [u8; 1] = [0x02];
const ACTIVITY_TAG: [u8; 1] = [0x03];
const CURRENCY_TAG: [u8; 1] = [0x04];

/// Claim message for the fixed-key signed points scheme. The nonce is
/// caller-supplied and only diversifies otherwise-identical grants; it is
/// not required to be sequential.
///
/// Field order and widths are part of the wire format shared with the
/// backend signer. Reordering or widening a field is a version break.
#[derive(AnchorSerialize)]
pub struct SignedPointsMessage {
    pub account: Pubkey,
    pub amount: u64,
    pub nonce: u64,
    pub domain: u64,
}

impl SignedPointsMessage {
    pub fn digest(&self) -> Result<[u8; 32]> {
        Ok(tagged_digest(&SIGNED_POINTS_TAG, &self.try_to_vec()?))
    }
}

/// Claim message for the flat-reward activity drop. The credited amount is a
/// program constant, so only the account and nonce are signed over.
#[derive(AnchorSerialize)]
pub struct ActivityMessage {
    pub account: Pubkey,
    pub nonce: u64,
    pub domain: u64,
}

impl ActivityMessage {
    pub fn digest(&self) -> Result<[u8; 32]> {
        Ok(tagged_digest(&ACTIVITY_TAG, &self.try_to_vec()?))
    }
}

/// Claim message for the rolling-nonce soft currency scheme. The nonce is
/// the account's current on-chain claim counter, never caller-supplied.
#[derive(AnchorSerialize)]
pub struct CurrencyMessage {
    pub account: Pubkey,
    pub points: u64,
    pub coins: u64,
    pub nonce: u64,
    pub domain: u64,
}

impl CurrencyMessage {
    pub fn digest(&self) -> Result<[u8; 32]> {
        Ok(tagged_digest(&CURRENCY_TAG, &self.try_to_vec()?))
    }
}

fn tagged_digest(tag: &[u8; 1], bytes: &[u8]) -> [u8; 32] {
    let mut input = Vec::with_capacity(1 + bytes.len());
    input.extend_from_slice(tag);
    input.extend_from_slice(bytes);
    keccak::hash(&input).to_bytes()
}

/// Recover the address that signed `digest`. Returns `None` when the
/// signature or recovery id is malformed; the caller decides which error of
/// its scheme's taxonomy that maps to.
pub fn recover_signer(digest: &[u8; 32], signature: &[u8; 64], recovery_id: u8) -> Option<EthAddress> {
    let pubkey = secp256k1_recover(digest, recovery_id, signature).ok()?;
    Some(eth_address(&pubkey.to_bytes()))
}

/// Derive the 20-byte signer address from an uncompressed public key.
pub fn eth_address(pubkey: &[u8; 64]) -> EthAddress {
    let hash = keccak::hash(pubkey).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Deterministic secp256k1 keypair for tests. `seed` must be nonzero.
    pub fn keypair(seed: u8) -> (libsecp256k1::SecretKey, EthAddress) {
        let mut sk_bytes = [0u8; 32];
        sk_bytes[31] = seed;
        let sk = libsecp256k1::SecretKey::parse(&sk_bytes).unwrap();
        let pk = libsecp256k1::PublicKey::from_secret_key(&sk);
        let mut uncompressed = [0u8; 64];
        uncompressed.copy_from_slice(&pk.serialize()[1..]);
        (sk, eth_address(&uncompressed))
    }

    pub fn sign(sk: &libsecp256k1::SecretKey, digest: &[u8; 32]) -> ([u8; 64], u8) {
        let (sig, rec) = libsecp256k1::sign(&libsecp256k1::Message::parse(digest), sk);
        (sig.serialize(), rec.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{keypair, sign};
    use super::*;

    #[test]
    fn test_derives_known_secp256k1_address() {
        // Address of secret key 0x...01, a standard test vector
        let (_, address) = keypair(1);
        let expected: EthAddress = [
            0x7e, 0x5f, 0x45, 0x52, 0x09, 0x1a, 0x69, 0x12, 0x5d, 0x5d, 0xfc, 0xb7, 0xb8, 0xc2,
            0x65, 0x90, 0x29, 0x39, 0x5b, 0xdf,
        ];
        assert_eq!(address, expected);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let account = Pubkey::new_unique();
        let a = SignedPointsMessage { account, amount: 10, nonce: 1, domain: 31337 };
        let b = SignedPointsMessage { account, amount: 10, nonce: 1, domain: 31337 };
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }

    #[test]
    fn test_digest_binds_every_field() {
        let account = Pubkey::new_unique();
        let base = SignedPointsMessage { account, amount: 10, nonce: 1, domain: 31337 };
        let digest = base.digest().unwrap();

        let other_account =
            SignedPointsMessage { account: Pubkey::new_unique(), amount: 10, nonce: 1, domain: 31337 };
        let other_amount = SignedPointsMessage { account, amount: 11, nonce: 1, domain: 31337 };
        let other_nonce = SignedPointsMessage { account, amount: 10, nonce: 2, domain: 31337 };
        let other_domain = SignedPointsMessage { account, amount: 10, nonce: 1, domain: 1 };

        assert_ne!(digest, other_account.digest().unwrap());
        assert_ne!(digest, other_amount.digest().unwrap());
        assert_ne!(digest, other_nonce.digest().unwrap());
        assert_ne!(digest, other_domain.digest().unwrap());
    }

    #[test]
    fn test_scheme_tags_separate_digests() {
        let bytes = [0xabu8; 48];
        assert_ne!(
            tagged_digest(&SIGNED_POINTS_TAG, &bytes),
            tagged_digest(&ACTIVITY_TAG, &bytes)
        );
        assert_ne!(
            tagged_digest(&ACTIVITY_TAG, &bytes),
            tagged_digest(&CURRENCY_TAG, &bytes)
        );
    }

    #[test]
    fn test_recovers_signer_from_valid_signature() {
        let (sk, address) = keypair(7);
        let digest = SignedPointsMessage {
            account: Pubkey::new_unique(),
            amount: 10,
            nonce: 1,
            domain: 31337,
        }
        .digest()
        .unwrap();

        let (signature, recovery_id) = sign(&sk, &digest);
        assert_eq!(recover_signer(&digest, &signature, recovery_id), Some(address));
    }

    #[test]
    fn test_recovered_address_differs_for_other_key() {
        let (sk, _) = keypair(7);
        let (_, other_address) = keypair(8);
        let digest = ActivityMessage {
            account: Pubkey::new_unique(),
            nonce: 1,
            domain: 31337,
        }
        .digest()
        .unwrap();

        let (signature, recovery_id) = sign(&sk, &digest);
        let recovered = recover_signer(&digest, &signature, recovery_id).unwrap();
        assert_ne!(recovered, other_address);
    }

    #[test]
    fn test_signature_over_stale_counter_does_not_verify() {
        // Rolling-nonce property: once the counter advances, a signature
        // built over the previous value no longer recovers to the signer.
        let (sk, address) = keypair(9);
        let account = Pubkey::new_unique();

        let stale = CurrencyMessage { account, points: 10, coins: 100, nonce: 0, domain: 31337 }
            .digest()
            .unwrap();
        let current = CurrencyMessage { account, points: 10, coins: 100, nonce: 1, domain: 31337 }
            .digest()
            .unwrap();

        let (signature, recovery_id) = sign(&sk, &stale);
        assert_eq!(recover_signer(&stale, &signature, recovery_id), Some(address));
        match recover_signer(&current, &signature, recovery_id) {
            Some(recovered) => assert_ne!(recovered, address),
            None => {}
        }
    }

    #[test]
    fn test_rejects_out_of_range_recovery_id() {
        let (sk, _) = keypair(7);
        let digest = [0x11u8; 32];
        let (signature, _) = sign(&sk, &digest);
        assert_eq!(recover_signer(&digest, &signature, 4), None);
    }
}
