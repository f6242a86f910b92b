use check_diff_core::{Invocation, Signature};
use sha2::{Digest, Sha256};

/// Incremental hasher for building invocation signatures
///
/// Inputs are fed as raw bytes with no separators, so the signature of an
/// invocation is the digest of `identifier ++ command ++ arg0 ++ arg1 ...`.
#[derive(Debug, Clone)]
pub struct SignatureHasher {
    hasher: Sha256,
    inputs: usize,
}

impl SignatureHasher {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            inputs: 0,
        }
    }

    /// Feed one string into the digest
    pub fn update(&mut self, input: &str) {
        self.hasher.update(input.as_bytes());
        self.inputs += 1;
    }

    /// Consume the hasher and return the lowercase hex digest
    pub fn finish(self) -> Signature {
        Signature::from_hex(format!("{:x}", self.hasher.finalize()))
    }
}

impl Default for SignatureHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the stable cache key for an invocation
pub fn derive_signature(invocation: &Invocation) -> Signature {
    let mut hasher = SignatureHasher::new();
    hasher.update(&invocation.identifier);
    hasher.update(&invocation.command);
    for arg in invocation.arguments.iter() {
        hasher.update(arg);
    }

    let inputs = hasher.inputs;
    let signature = hasher.finish();
    tracing::debug!(
        signature = %signature,
        command = %invocation.command,
        inputs,
        "derived invocation signature"
    );
    signature
}
