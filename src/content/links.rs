//! Outbound links and external assets.

/// Site logo image.
pub const LOGO_URL: &str = "https://i.postimg.cc/C5Xz8WZt/2.png";

/// Hero background photograph.
pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1621905251189-fc015302338d?q=80&w=2070&auto=format&fit=crop";

/// Shareable map link for the park location.
pub const MAP_URL: &str = "https://maps.app.goo.gl/NZ6FPwnFx5qjTT3d9";

/// Embeddable map of Dammam 3rd Industrial City.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d57275.64788674543!2d49.9158!3d26.1667!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3e49e5e6651a4981%3A0x7616576271825040!2sDammam%203rd%20Industrial%20City!5e0!3m2!1sen!2ssa!4v1709640000000!5m2!1sen!2ssa";

/// Partner company operating the aluminum profile plant.
pub const PARTNER_ALUMINUM_URL: &str = "https://www.nkaluminum.sa";

/// Saudi Authority for Industrial Cities and Technology Zones.
pub const INDUSTRIAL_AUTHORITY_URL: &str = "https://modon.gov.sa";

/// Business contact address.
pub const CONTACT_EMAIL: &str = "Business@everwinpark.com";

/// `mailto:` link for [`CONTACT_EMAIL`].
pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_mailto() {
        assert_eq!(contact_mailto(), "mailto:Business@everwinpark.com");
    }

    #[test]
    fn test_outbound_links_are_https() {
        for url in [
            LOGO_URL,
            HERO_IMAGE_URL,
            MAP_URL,
            MAP_EMBED_URL,
            PARTNER_ALUMINUM_URL,
            INDUSTRIAL_AUTHORITY_URL,
        ] {
            assert!(url.starts_with("https://"), "{}", url);
        }
    }
}
