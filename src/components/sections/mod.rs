//! Page sections, one component per block of the single-page layout.
//!
//! Sections are direct renderings of the [`crate::profile`] content model;
//! the only stateful pieces are the mobile menu toggle, the hero role
//! rotation, the testimonial carousel index, and the contact form.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
pub use testimonials::Testimonials;

/// Anchor targets for the header and footer navigation.
pub(crate) const NAV_LINKS: [(&str, &str); 5] = [
	("home", "Home"),
	("about", "About"),
	("skills", "Skills"),
	("projects", "Projects"),
	("contact", "Contact"),
];
