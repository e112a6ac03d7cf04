//! Page content model.
//!
//! Everything the sections render is plain display data: identity, skills,
//! projects, testimonials, and contact channels. The whole record can be
//! overridden by a JSON `<script id="profile-data">` element; any field the
//! JSON omits falls back to the built-in defaults below.

use serde::Deserialize;

/// One skill with a proficiency bar.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Proficiency percentage, 0 to 100.
	pub level: u8,
	/// Accent color for the bar (CSS color string).
	pub color: String,
}

/// A titled group of skills (e.g. "Frontend Development").
#[derive(Clone, Debug, Deserialize)]
pub struct SkillGroup {
	pub title: String,
	pub skills: Vec<Skill>,
}

/// One project card.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	pub tags: Vec<String>,
	pub repo: String,
	#[serde(default)]
	pub live: Option<String>,
}

/// One client testimonial for the carousel.
#[derive(Clone, Debug, Deserialize)]
pub struct Testimonial {
	pub name: String,
	pub role: String,
	pub quote: String,
	/// Star rating, 0 to 5.
	pub rating: u8,
}

/// A labelled contact channel (address, phone, email).
#[derive(Clone, Debug, Deserialize)]
pub struct ContactMethod {
	pub label: String,
	pub value: String,
	pub href: String,
}

/// An external profile link.
#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
	pub label: String,
	pub href: String,
}

/// Complete site content.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	pub headline: String,
	pub badge: String,
	/// Role strings rotated in the hero subtitle.
	pub roles: Vec<String>,
	pub summary: String,
	pub about: Vec<String>,
	pub tech_stack: Vec<String>,
	pub resume_url: String,
	pub skill_groups: Vec<SkillGroup>,
	pub projects: Vec<Project>,
	pub testimonials: Vec<Testimonial>,
	pub contact_methods: Vec<ContactMethod>,
	pub social_links: Vec<SocialLink>,
}

fn skill(name: &str, level: u8, color: &str) -> Skill {
	Skill {
		name: name.into(),
		level,
		color: color.into(),
	}
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: "Mekdes Wale".into(),
			headline: "Crafting Digital Experiences".into(),
			badge: "Open to Opportunities".into(),
			roles: vec![
				"Frontend Developer".into(),
				"React & Node.js Expert".into(),
				"Full Stack Specialist".into(),
				"Backend Developer".into(),
				"Performance Optimizer".into(),
			],
			summary: "I architect and build high-performance web applications using \
				modern technologies, turning complex requirements into elegant, \
				scalable solutions that drive business growth."
				.into(),
			about: vec![
				"I'm a motivated frontend developer specializing in React, with \
				 hands-on experience building dynamic web applications. My journey \
				 in tech started with a deep curiosity for how things work, leading \
				 me to dive into coding, where I discovered a love for turning \
				 ideas into interactive, user-centric experiences."
					.into(),
				"I focus on writing clean, maintainable code and enjoy solving \
				 problems with modern tools like TypeScript, Tailwind CSS, and \
				 Next.js. When I'm not coding, I'm learning new technologies, \
				 contributing to open-source projects, or sketching UI designs."
					.into(),
			],
			tech_stack: vec![
				"React".into(),
				"TypeScript".into(),
				"Next.js".into(),
				"Node.js".into(),
				"Tailwind".into(),
				"MongoDB".into(),
			],
			resume_url: "/resume.pdf".into(),
			skill_groups: vec![
				SkillGroup {
					title: "Frontend Development".into(),
					skills: vec![
						skill("React", 95, "#61DAFB"),
						skill("JavaScript", 90, "#F7DF1E"),
						skill("TypeScript", 85, "#3178C6"),
						skill("HTML5", 98, "#E34F26"),
						skill("CSS3", 95, "#1572B6"),
						skill("Tailwind", 90, "#06B6D4"),
					],
				},
				SkillGroup {
					title: "UI/UX Design".into(),
					skills: vec![
						skill("UI/UX Design", 90, "#F24E1E"),
						skill("Figma", 92, "#F24E1E"),
						skill("Adobe XD", 85, "#FF61F6"),
						skill("Sketch", 75, "#F7B500"),
						skill("Prototyping", 88, "#F24E1E"),
					],
				},
			],
			projects: vec![
				Project {
					title: "Dental Clinic Management".into(),
					description: "A comprehensive management system for dental clinics \
						with appointment scheduling, patient records, and billing \
						features. Built with React, Node.js, and MongoDB."
						.into(),
					tags: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
					repo: "https://github.com/19mekdes/Tana-Med-Solution".into(),
					live: None,
				},
				Project {
					title: "E-Commerce Website".into(),
					description: "Full-featured online store with product catalog, \
						shopping cart, and payment integration. Includes an admin \
						dashboard for inventory management."
						.into(),
					tags: vec![
						"HTML".into(),
						"CSS".into(),
						"JavaScript".into(),
						"Tailwind CSS".into(),
					],
					repo: "https://github.com/19mekdes/E-commerce-website".into(),
					live: None,
				},
				Project {
					title: "Video Call Application".into(),
					description: "Real-time video conferencing app with screen sharing, \
						chat, and recording capabilities. Uses WebRTC for peer-to-peer \
						connections."
						.into(),
					tags: vec!["WebRTC".into(), "JavaScript".into(), "Bootstrap".into()],
					repo: "https://github.com/19mekdes/Video-call".into(),
					live: None,
				},
				Project {
					title: "QR Code Packaging System".into(),
					description: "Custom QR code generator for product packaging that \
						tracks inventory and provides product information to consumers."
						.into(),
					tags: vec!["JavaScript".into(), "QR Code".into()],
					repo: "https://github.com/19mekdes/QR-Generater".into(),
					live: None,
				},
				Project {
					title: "Portfolio".into(),
					description: "This site: a single-page portfolio with canvas \
						particle backdrops, built as a Rust/WASM application."
						.into(),
					tags: vec!["Rust".into(), "Leptos".into(), "WASM".into()],
					repo: "https://github.com/19mekdes/portfolio".into(),
					live: None,
				},
			],
			testimonials: vec![
				Testimonial {
					name: "Mastewal".into(),
					role: "CEO, Dental Clinic Inc.".into(),
					quote: "The dental clinic management system revolutionized our \
						practice. Appointment scheduling became effortless, and patient \
						record management is now completely paperless."
						.into(),
					rating: 5,
				},
				Testimonial {
					name: "Mulu".into(),
					role: "E-Commerce Manager".into(),
					quote: "Our online store's performance improved dramatically after \
						the redesign. The checkout process is now seamless, and the \
						admin dashboard makes inventory management a breeze."
						.into(),
					rating: 4,
				},
				Testimonial {
					name: "Kenen".into(),
					role: "Product Manager".into(),
					quote: "The QR code packaging system exceeded our expectations. It \
						improved our inventory tracking and enhanced customer \
						engagement, delivered on time and extremely reliable."
						.into(),
					rating: 5,
				},
			],
			contact_methods: vec![
				ContactMethod {
					label: "Address".into(),
					value: "Addis Ababa, Ethiopia".into(),
					href: "https://maps.google.com/?q=Addis+Ababa".into(),
				},
				ContactMethod {
					label: "Phone".into(),
					value: "+251 980 536 095".into(),
					href: "tel:+251980536095".into(),
				},
				ContactMethod {
					label: "Email".into(),
					value: "mekdesw60@gmail.com".into(),
					href: "mailto:mekdesw60@gmail.com".into(),
				},
			],
			social_links: vec![
				SocialLink {
					label: "GitHub".into(),
					href: "https://github.com/19mekdes".into(),
				},
				SocialLink {
					label: "LinkedIn".into(),
					href: "https://www.linkedin.com/in/mekdes-wale-79a974322".into(),
				},
				SocialLink {
					label: "Twitter".into(),
					href: "https://twitter.com/19mekdes".into(),
				},
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_internally_consistent() {
		let profile = Profile::default();
		assert!(!profile.roles.is_empty());
		assert!(!profile.skill_groups.is_empty());
		for group in &profile.skill_groups {
			for skill in &group.skills {
				assert!(skill.level <= 100, "{} over 100%", skill.name);
			}
		}
		for t in &profile.testimonials {
			assert!(t.rating <= 5);
		}
	}

	#[test]
	fn partial_json_overrides_fall_back_to_defaults() {
		let profile: Profile =
			serde_json::from_str(r#"{ "name": "Someone Else" }"#).expect("valid override");
		assert_eq!(profile.name, "Someone Else");
		assert_eq!(profile.projects.len(), Profile::default().projects.len());
	}

	#[test]
	fn full_records_deserialize() {
		let json = r#"{
			"projects": [
				{
					"title": "Demo",
					"description": "A demo.",
					"tags": ["Rust"],
					"repo": "https://example.com/demo",
					"live": "https://demo.example.com"
				}
			]
		}"#;
		let profile: Profile = serde_json::from_str(json).expect("valid profile");
		assert_eq!(profile.projects.len(), 1);
		assert_eq!(
			profile.projects[0].live.as_deref(),
			Some("https://demo.example.com")
		);
	}
}
