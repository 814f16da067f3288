use rustls::{
    pki_types::{pem::PemObject, CertificateDer},
    RootCertStore,
};
use tonic::{
    metadata::{Ascii, MetadataValue},
    service::{interceptor::InterceptedService, Interceptor},
    transport::{Certificate, Channel, ClientTlsConfig, Endpoint},
    Request, Status,
};

use crate::{ConnectorError, CredentialPair};

pub const MACAROON_METADATA_KEY: &str = "macaroon";

pub type AuthedChannel = InterceptedService<Channel, MacaroonInterceptor>;

/// Attaches the macaroon to every outbound call. The value is resolved before the
/// connection exists, so a call never touches the credential store.
#[derive(Clone)]
pub struct MacaroonInterceptor {
    macaroon: MetadataValue<Ascii>,
}

impl MacaroonInterceptor {
    fn new(macaroon_hex: &str) -> Result<Self, tonic::metadata::errors::InvalidMetadataValue> {
        Ok(Self {
            macaroon: MetadataValue::try_from(macaroon_hex)?,
        })
    }
}

impl std::fmt::Debug for MacaroonInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MacaroonInterceptor(<redacted>)")
    }
}

impl Interceptor for MacaroonInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request.metadata_mut().insert(MACAROON_METADATA_KEY, self.macaroon.clone());
        Ok(request)
    }
}

/// A lazily connected TLS channel to one node, bound to that node's certificate and
/// macaroon. Built per request and dropped after it.
pub struct SecureConnection {
    address: String,
    channel: Channel,
    interceptor: MacaroonInterceptor,
}

impl SecureConnection {
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn authed_channel(&self) -> AuthedChannel {
        InterceptedService::new(self.channel.clone(), self.interceptor.clone())
    }
}

/// Combines transport trust and call credentials for `address`. Both are required by
/// signature, so a connection with only one of them cannot exist.
///
/// Fails with [`ConnectorError::ConnectionSetup`] when the certificate is not usable or
/// the address is not a valid authority. Handshake problems only show up on the first
/// call, since the channel connects lazily.
pub fn create_secure_connection(address: String, credentials: CredentialPair) -> Result<SecureConnection, ConnectorError> {
    validate_certificate(&address, credentials.certificate())?;
    let interceptor = MacaroonInterceptor::new(credentials.macaroon_hex()).map_err(|e| ConnectorError::setup(&address, format!("invalid macaroon metadata: {e}")))?;

    let tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(credentials.certificate()));
    let endpoint = Endpoint::from_shared(format!("https://{address}"))
        .map_err(|e| ConnectorError::setup(&address, format!("invalid address: {e}")))?
        .tls_config(tls)
        .map_err(|e| ConnectorError::setup(&address, format!("tls config rejected: {e}")))?;

    log::debug!("[SecureConnection] created lazy channel to {address}");
    Ok(SecureConnection {
        channel: endpoint.connect_lazy(),
        address,
        interceptor,
    })
}

fn validate_certificate(address: &str, pem: &[u8]) -> Result<(), ConnectorError> {
    let certs = CertificateDer::pem_slice_iter(pem)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConnectorError::setup(address, format!("malformed certificate pem: {e:?}")))?;
    if certs.is_empty() {
        return Err(ConnectorError::setup(address, "certificate file holds no PEM certificate"));
    }

    let mut roots = RootCertStore::empty();
    for cert in certs {
        roots.add(cert).map_err(|e| ConnectorError::setup(address, format!("certificate rejected: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::test_utils::node_cert_pem;

    #[test(tokio::test)]
    async fn create_with_valid_pair() {
        let credentials = CredentialPair::new(node_cert_pem(), &[0xaa, 0x01]);
        let connection = create_secure_connection("lnd:10009".to_string(), credentials).unwrap();
        assert_eq!(connection.address(), "lnd:10009");
    }

    #[test(tokio::test)]
    async fn garbage_certificate_is_setup_error() {
        let credentials = CredentialPair::new(b"definitely not a certificate".to_vec(), &[0x01]);
        match create_secure_connection("lnd:10009".to_string(), credentials) {
            Err(ConnectorError::ConnectionSetup { address, .. }) => assert_eq!(address, "lnd:10009"),
            Err(other) => panic!("unexpected {other:?}"),
            Ok(_) => panic!("connection must not be created"),
        }
    }

    #[test(tokio::test)]
    async fn corrupted_certificate_body_is_setup_error() {
        let pem = "-----BEGIN CERTIFICATE-----\nAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\n-----END CERTIFICATE-----\n";
        let credentials = CredentialPair::new(pem.as_bytes().to_vec(), &[0x01]);
        assert!(matches!(create_secure_connection("lnd:10009".to_string(), credentials), Err(ConnectorError::ConnectionSetup { .. })));
    }

    #[test(tokio::test)]
    async fn malformed_address_is_setup_error() {
        let credentials = CredentialPair::new(node_cert_pem(), &[0x01]);
        match create_secure_connection("not a host:port".to_string(), credentials) {
            Err(ConnectorError::ConnectionSetup { address, reason }) => {
                assert_eq!(address, "not a host:port");
                assert!(reason.contains("invalid address"), "{reason}");
            }
            Err(other) => panic!("unexpected {other:?}"),
            Ok(_) => panic!("connection must not be created"),
        }
    }

    #[test]
    fn interceptor_attaches_hex_macaroon() {
        let credentials = CredentialPair::new(vec![], &[0x02, 0x01, 0x03]);
        let mut interceptor = MacaroonInterceptor::new(credentials.macaroon_hex()).unwrap();
        for _ in 0..2 {
            let request = interceptor.call(Request::new(())).unwrap();
            assert_eq!(request.metadata().get(MACAROON_METADATA_KEY).unwrap().to_str().unwrap(), "020103");
        }
    }
}
