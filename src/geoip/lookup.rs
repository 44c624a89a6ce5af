//! Deriving IP fields from injected resolvers.

use std::sync::Arc;

use super::types::IpFields;
use super::IpResolver;

/// Derives city, country and ASN fields for an address.
///
/// Holds one resolver per field. Resolvers are shared through `Arc` so a
/// single loaded dataset can serve many enrichers and threads.
#[derive(Clone)]
pub struct IpEnricher {
    city: Arc<dyn IpResolver>,
    country: Arc<dyn IpResolver>,
    asn: Arc<dyn IpResolver>,
}

impl IpEnricher {
    /// Creates an enricher from one resolver per field.
    pub fn new(
        city: Arc<dyn IpResolver>,
        country: Arc<dyn IpResolver>,
        asn: Arc<dyn IpResolver>,
    ) -> Self {
        Self { city, country, asn }
    }

    /// Resolves all three fields for `ip`.
    ///
    /// A missing or unparseable address yields empty fields, never an error.
    pub fn derive(&self, ip: Option<&str>) -> IpFields {
        let Some(ip) = ip else {
            return IpFields::default();
        };

        IpFields {
            ip_city: self.city.resolve(ip).unwrap_or_default(),
            ip_country: self.country.resolve(ip).unwrap_or_default(),
            ip_asn: self.asn.resolve(ip).unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for IpEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpEnricher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedResolver(HashMap<&'static str, &'static str>);

    impl IpResolver for FixedResolver {
        fn resolve(&self, ip: &str) -> Option<String> {
            self.0.get(ip).map(|v| v.to_string())
        }
    }

    fn fixed(pairs: &[(&'static str, &'static str)]) -> Arc<dyn IpResolver> {
        Arc::new(FixedResolver(pairs.iter().copied().collect()))
    }

    #[test]
    fn test_derive_all_fields() {
        let enricher = IpEnricher::new(
            fixed(&[("1.0.0.1", "Foo")]),
            fixed(&[("1.0.0.1", "Australia")]),
            fixed(&[("1.0.0.1", "AS1234")]),
        );
        let fields = enricher.derive(Some("1.0.0.1"));
        assert_eq!(fields.ip_city, "Foo");
        assert_eq!(fields.ip_country, "Australia");
        assert_eq!(fields.ip_asn, "AS1234");
        assert!(fields.any_resolved());
    }

    #[test]
    fn test_derive_partial_coverage() {
        let enricher = IpEnricher::new(
            fixed(&[]),
            fixed(&[("1.0.0.1", "Australia")]),
            fixed(&[]),
        );
        let fields = enricher.derive(Some("1.0.0.1"));
        assert_eq!(fields.ip_city, "");
        assert_eq!(fields.ip_country, "Australia");
        assert_eq!(fields.ip_asn, "");
    }

    #[test]
    fn test_derive_absent_ip() {
        let enricher = IpEnricher::new(
            fixed(&[("1.0.0.1", "Foo")]),
            fixed(&[]),
            fixed(&[]),
        );
        assert_eq!(enricher.derive(None), IpFields::default());
        assert!(!enricher.derive(Some("9.9.9.9")).any_resolved());
    }
}
