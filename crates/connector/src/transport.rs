//! Process wide TLS setup.
//!
//! LND generates ECDSA certificates, so the crypto provider offers the suites able to
//! negotiate with them first. This must run before the first channel is built.

use rustls::{
    crypto::{ring, CryptoProvider},
    CipherSuite, SupportedCipherSuite,
};

const ECDSA_TLS12_SUITES: &[CipherSuite] = &[
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
];

/// TLS 1.3 suites are independent of the certificate key type.
pub fn is_ecdsa_compatible(suite: &SupportedCipherSuite) -> bool {
    suite.tls13().is_some() || ECDSA_TLS12_SUITES.contains(&suite.suite())
}

pub fn ecdsa_preferred_provider() -> CryptoProvider {
    let mut provider = ring::default_provider();
    // stable sort keeps ring's own preference inside each group
    provider.cipher_suites.sort_by_key(|suite| !is_ecdsa_compatible(suite));
    provider
}

/// Idempotent, later calls keep the provider installed first.
pub fn install_crypto_provider() {
    match ecdsa_preferred_provider().install_default() {
        Ok(()) => log::info!("[Transport] installed crypto provider preferring ECDSA cipher suites"),
        Err(_) => log::debug!("[Transport] crypto provider already installed"),
    }
}
