//! Fixed offerings of each deployment variant: services, intake categories.

use shared::{ProfileDetails, ServiceOffer};

use crate::config::PortalVariant;

/// Primary aesthetic goals a dental patient can pick at intake
pub const DENTAL_CONCERNS: [&str; 4] = [
    "Straightening / Invisalign",
    "Brightening / Whitening",
    "Restoration / Veneers",
    "General Consultation",
];

/// Short labels written by earlier builds; still valid in stored profiles
const LEGACY_CONCERNS: [&str; 3] = ["Invisalign", "Whitening", "Veneers"];

fn offer(name: &str, price: &str, blurb: &str) -> ServiceOffer {
    ServiceOffer {
        name: name.to_string(),
        price: price.to_string(),
        blurb: blurb.to_string(),
    }
}

/// The hero service promoted at the top of the services tab
pub fn featured_service(variant: PortalVariant) -> ServiceOffer {
    match variant {
        PortalVariant::Dental => offer("Comprehensive Assessment", "$250", "Initial Assessment"),
        PortalVariant::Grooming => offer("Full Grooming", "$95", "Bath, cut and finish"),
    }
}

/// Every bookable service, featured one first
pub fn services(variant: PortalVariant) -> Vec<ServiceOffer> {
    let mut offers = vec![featured_service(variant)];
    match variant {
        PortalVariant::Dental => offers.extend([
            offer("Veneers Consultation", "$150", "Clinical Procedure"),
            offer("Invisalign® Consult", "$95", "Clinical Procedure"),
            offer("Laser Whitening", "$650", "Clinical Procedure"),
        ]),
        PortalVariant::Grooming => offers.extend([
            offer("Bath & Brush", "$55", "Wash, dry and brush out"),
            offer("Nail Trim", "$20", "Quick paw care"),
        ]),
    }
    offers
}

/// Intake options shown in the profile form; empty for free-text variants
pub fn concern_options(variant: PortalVariant) -> &'static [&'static str] {
    match variant {
        PortalVariant::Dental => &DENTAL_CONCERNS,
        PortalVariant::Grooming => &[],
    }
}

/// Options for the concern picker, keeping a stored value the list no longer offers
pub fn concern_choices<'a>(options: &[&'a str], current: &'a str) -> Vec<&'a str> {
    let mut choices = options.to_vec();
    if !current.is_empty() && !choices.contains(&current) {
        choices.push(current);
    }
    choices
}

pub fn is_known_concern(concern: &str) -> bool {
    DENTAL_CONCERNS.contains(&concern) || LEGACY_CONCERNS.contains(&concern)
}

/// Empty variant-specific profile fields
pub fn blank_details(variant: PortalVariant) -> ProfileDetails {
    match variant {
        PortalVariant::Dental => ProfileDetails::empty_patient(),
        PortalVariant::Grooming => ProfileDetails::empty_pet(),
    }
}

/// Call-to-action text for the primary booking buttons
pub fn booking_call_to_action(variant: PortalVariant) -> &'static str {
    match variant {
        PortalVariant::Dental => "Book Initial Assessment",
        PortalVariant::Grooming => "Book Full Groom",
    }
}
