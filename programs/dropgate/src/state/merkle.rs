use anchor_lang::prelude::*;
use solana_program::keccak;

/// Domain separation prefixes for the allowlist tree.
/// Prevents second pre-image attacks by distinguishing leaves from internal nodes.
const LEAF_PREFIX: [u8; 1] = [0x00];
const NODE_PREFIX: [u8; 1] = [0x01];

/// Allocation data committed to the allowlist tree, one leaf per account.
/// Only the Merkle root is on-chain; the tree itself lives with the
/// off-chain builder, which must serialize leaves exactly like this.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct AllocationLeaf {
    /// Account entitled to the allocation
    pub account: Pubkey,
    /// Allocation amount, always positive for committed leaves
    pub amount: u64,
}

impl AllocationLeaf {
    pub const SERIALIZED_SIZE: usize = 32 + 8; // 40 bytes per leaf

    pub fn digest(&self) -> Result<[u8; 32]> {
        Ok(hash_leaf(&self.try_to_vec()?))
    }
}

/// Hash a leaf node with domain separation.
/// leaf_hash = keccak256(0x00 || data)
pub fn hash_leaf(data: &[u8]) -> [u8; 32] {
    let mut input = Vec::with_capacity(1 + data.len());
    input.extend_from_slice(&LEAF_PREFIX);
    input.extend_from_slice(data);
    keccak::hash(&input).to_bytes()
}

/// Hash two child nodes into a parent node with domain separation.
/// node_hash = keccak256(0x01 || left || right)
pub fn hash_nodes(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut input = Vec::with_capacity(1 + 32 + 32);
    input.extend_from_slice(&NODE_PREFIX);
    input.extend_from_slice(left);
    input.extend_from_slice(right);
    keccak::hash(&input).to_bytes()
}

/// Verify a Merkle proof against a known root.
///
/// Pairwise hashing is position-indexed: the leaf index selects left/right
/// at each level. The off-chain tree builder uses the same convention and
/// pads to a power of two with zero leaves; an asymmetric ordering on either
/// side silently breaks every proof.
///
/// # Arguments
/// * `proof` - The sibling hashes along the path from leaf to root
/// * `root` - The expected Merkle root
/// * `leaf` - The leaf hash to verify
/// * `index` - The leaf's position in the tree (determines left/right at each level)
///
/// # Returns
/// `true` if the proof is valid, `false` otherwise
pub fn verify_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: &[u8; 32], index: u32) -> bool {
    let mut computed = *leaf;
    let mut idx = index;

    for sibling in proof.iter() {
        if idx % 2 == 0 {
            // Current node is on the left, sibling is on the right
            computed = hash_nodes(&computed, sibling);
        } else {
            // Current node is on the right, sibling is on the left
            computed = hash_nodes(sibling, &computed);
        }
        idx /= 2;
    }

    computed == *root
}
