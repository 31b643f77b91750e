//! Signing, verification and hashing payloads.

use std::hint::black_box;
use std::time::Duration;

use k256::ecdsa::{
    Signature, SigningKey, VerifyingKey,
    signature::{Signer, Verifier},
};
use sha2::{Digest, Sha256};

use crate::{
    error::HarnessError,
    report,
    workload::{Operation, Workload},
};

const MESSAGE: &[u8] = b"parbench signing payload";
const HASH_BUF_LEN: usize = 8192;

/// ECDSA/secp256k1 signing of a fixed message. Each worker generates its
/// own key at setup; RFC 6979 nonces keep the per-operation cost stable.
pub struct EcdsaSign;

impl EcdsaSign {
    pub fn new() -> Self {
        Self
    }
}

impl Workload for EcdsaSign {
    fn name(&self) -> &str {
        "ecdsa.sign secp256k1"
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let key = SigningKey::random(&mut rand::thread_rng());
        Ok(Box::new(move || {
            let sig: Signature = key.sign(MESSAGE);
            black_box(sig);
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::ops_per_sec(total_ops, duration)
    }
}

/// ECDSA/secp256k1 verification of a signature produced at setup. The
/// signature is known-good, so a failed verification is an invariant
/// violation.
pub struct EcdsaVerify;

impl EcdsaVerify {
    pub fn new() -> Self {
        Self
    }
}

impl Workload for EcdsaVerify {
    fn name(&self) -> &str {
        "ecdsa.verify secp256k1"
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let key = SigningKey::random(&mut rand::thread_rng());
        let verifier: VerifyingKey = key.verifying_key().clone();
        let sig: Signature = key.sign(MESSAGE);
        Ok(Box::new(move || {
            verifier.verify(MESSAGE, &sig).map_err(|_| {
                HarnessError::WorkloadInvariant(
                    "ecdsa.verify: known-good signature failed to verify".into(),
                )
            })
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::ops_per_sec(total_ops, duration)
    }
}

/// SHA-256 over a fixed 8 KiB buffer, reported as throughput.
pub struct Sha256Hash;

impl Sha256Hash {
    pub fn new() -> Self {
        Self
    }
}

impl Workload for Sha256Hash {
    fn name(&self) -> &str {
        "sha256.hash 8KiB"
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let buf = vec![0xa5u8; HASH_BUF_LEN];
        Ok(Box::new(move || {
            black_box(Sha256::digest(&buf));
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::mib_per_sec(total_ops, HASH_BUF_LEN, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_operation_runs() {
        let mut op = EcdsaSign::new().setup().unwrap();
        op().unwrap();
        op().unwrap();
    }

    #[test]
    fn verify_operation_accepts_its_own_signature() {
        let mut op = EcdsaVerify::new().setup().unwrap();
        op().unwrap();
    }

    #[test]
    fn hash_reports_throughput() {
        let workload = Sha256Hash::new();
        let mut op = workload.setup().unwrap();
        op().unwrap();
        let line = workload.report(1024, Duration::from_secs(1));
        assert!(line.ends_with("MiB/s"), "{line}");
    }
}
