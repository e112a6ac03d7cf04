//! devfolio: a single-page developer portfolio rendered client-side.
//!
//! The page is assembled from declarative section components (hero, about,
//! skills, projects, testimonials, contact, footer); several sections carry
//! a decorative canvas particle animation behind their content. Site
//! content comes from a JSON `<script id="profile-data">` element when
//! present, otherwise from built-in defaults.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod profile;

use components::sections::{
	About, Contact, Footer, Header, Hero, Projects, Skills, Testimonials,
};
pub use components::particle_field::{FieldConfig, ParticleCanvas};
pub use profile::Profile;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("devfolio: logging initialized");
}

/// Load site content from a script element with id="profile-data".
/// Missing element or malformed JSON both fall back to the defaults.
fn load_profile() -> Option<Profile> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("profile-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Profile>(&json_text) {
		Ok(profile) => {
			info!("devfolio: loaded profile for {}", profile.name);
			Some(profile)
		}
		Err(e) => {
			warn!("devfolio: failed to parse profile data: {}", e);
			None
		}
	}
}

/// Main application component: loads content and lays out the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let profile = load_profile().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=format!("{} | Portfolio", profile.name) />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=profile.summary.clone() />

		<div class="app">
			<Header name=profile.name.clone() />

			<main class="main-content">
				<Hero profile=profile.clone() />
				<About paragraphs=profile.about.clone() />
				<Skills groups=profile.skill_groups.clone() />
				<Projects projects=profile.projects.clone() />
				<Testimonials testimonials=profile.testimonials.clone() />
				<Contact
					methods=profile.contact_methods.clone()
					socials=profile.social_links.clone()
				/>
			</main>

			<Footer
				name=profile.name.clone()
				summary=profile.summary.clone()
				methods=profile.contact_methods.clone()
				socials=profile.social_links.clone()
			/>
		</div>
	}
}
