//! About section: bio paragraphs over a container-scoped particle field.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};

#[component]
pub fn About(paragraphs: Vec<String>) -> impl IntoView {
	let text = paragraphs
		.into_iter()
		.map(|p| view! { <p class="about-text">{p}</p> })
		.collect_view();

	view! {
		<section id="about" class="about-section">
			<ParticleCanvas config=FieldConfig::about() />

			<div class="about-container">
				<div class="about-content">
					<h2 class="section-title">"About " <span class="title-highlight">"Me"</span></h2>
					<h3 class="section-subtitle">"Passionate Full Stack Developer"</h3>
					{text}
				</div>
			</div>
		</section>
	}
}
