//! Fullscreen hero section with the dense particle backdrop.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::profile::{Profile, SocialLink};

/// How long each rotating role line is shown.
const ROLE_ROTATION: Duration = Duration::from_millis(2500);

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
	let roles = profile.roles.clone();
	let role_index = RwSignal::new(0usize);

	if roles.len() > 1 {
		let count = roles.len();
		let handle = set_interval_with_handle(
			move || role_index.update(|i| *i = (*i + 1) % count),
			ROLE_ROTATION,
		);
		if let Ok(handle) = handle {
			on_cleanup(move || handle.clear());
		}
	}

	let current_role = move || {
		roles
			.get(role_index.get())
			.cloned()
			.unwrap_or_default()
	};

	let tech_items = profile
		.tech_stack
		.iter()
		.map(|tech| view! { <span class="tech-item">{tech.clone()}</span> })
		.collect_view();

	let socials = profile
		.social_links
		.iter()
		.map(|SocialLink { label, href }| {
			view! {
				<a href=href.clone() target="_blank" rel="noreferrer" class="social-link">
					{label.clone()}
				</a>
			}
		})
		.collect_view();

	view! {
		<section id="home" class="hero-section">
			<ParticleCanvas config=FieldConfig::hero() fullscreen=true />

			<div class="hero-container">
				<div class="hero-content">
					<div class="professional-badge">
						<span class="badge-dot"></span>
						<span class="badge-text">{profile.badge.clone()}</span>
					</div>

					<h1 class="hero-title">
						{profile.headline.clone()} <br />
						<span class="title-name">{profile.name.clone()}</span>
					</h1>

					<div class="role-container">
						<h2 class="hero-subtitle">{current_role}</h2>
					</div>

					<p class="hero-description">{profile.summary.clone()}</p>

					<div class="tech-stack">
						<div class="tech-label">"Tech Stack"</div>
						<div class="tech-items">{tech_items}</div>
					</div>

					<div class="hero-actions">
						<a href="#projects" class="cta-button primary">
							"View Projects"
						</a>
						<a href="#contact" class="cta-button secondary">
							"Contact Me"
						</a>
						<a href=profile.resume_url.clone() download="" class="resume-button">
							"Resume"
						</a>
					</div>

					<div class="social-links">{socials}</div>
				</div>
			</div>

			<div class="scroll-indicator">
				<span class="scroll-text">"Explore My Work"</span>
			</div>
		</section>
	}
}
