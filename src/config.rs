//! Runtime configuration from the environment.

pub fn wfs_url() -> String {
    std::env::var("WFS_URL").unwrap_or_else(|_| {
        let default = "https://geoserver.semob.df.gov.br/geoserver/semob/ows".to_string();
        tracing::trace!("WFS_URL not set, using default: {default}");
        default
    })
}

pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        let default = "0.0.0.0:8080".to_string();
        tracing::trace!("BIND_ADDR not set, using default: {default}");
        default
    })
}

/// Whether the upstream TLS certificate is verified. Defaults to on; the
/// upstream geoserver has a history of expired certificates, so operators
/// can switch it off explicitly.
pub fn verify_upstream_cert() -> bool {
    std::env::var("VERIFY_UPSTREAM_CERT").ok().is_none_or(|value| {
        !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
    })
}

#[cfg(test)]
mod tests {
    use super::verify_upstream_cert;

    #[test]
    fn verify_toggle() {
        // SAFETY:
        // This is safe in a test context as tests are run sequentially.
        unsafe {
            std::env::remove_var("VERIFY_UPSTREAM_CERT");
        };
        assert!(verify_upstream_cert());

        // SAFETY:
        // This is safe in a test context as tests are run sequentially.
        unsafe {
            std::env::set_var("VERIFY_UPSTREAM_CERT", "false");
        };
        assert!(!verify_upstream_cert());

        // SAFETY:
        // This is safe in a test context as tests are run sequentially.
        unsafe {
            std::env::set_var("VERIFY_UPSTREAM_CERT", "1");
        };
        assert!(verify_upstream_cert());
    }
}
