/// Seed of the presale record PDA. The record is also the token authority of the escrow.
pub const PRESALE_SEED: &[u8] = b"presale";

/// Seed of the lamport vault that collects payments, scoped to the presale record.
pub const TREASURY_SEED: &[u8] = b"treasury";
