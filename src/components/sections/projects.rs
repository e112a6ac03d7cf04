//! Projects section: a card grid of featured work.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::profile::Project;

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
	let cards = projects
		.into_iter()
		.map(|project| {
			let tags = project
				.tags
				.into_iter()
				.map(|tag| view! { <span class="project-tag">{tag}</span> })
				.collect_view();

			let live_link = project.live.map(|href| {
				view! {
					<a href=href target="_blank" rel="noopener noreferrer" class="project-link">
						"Live Demo"
					</a>
				}
			});

			view! {
				<div class="project-card">
					<div class="project-content">
						<h3>{project.title}</h3>
						<p>{project.description}</p>
						<div class="project-tags">{tags}</div>
						<div class="project-links">
							<a
								href=project.repo
								target="_blank"
								rel="noopener noreferrer"
								class="project-link"
							>
								"Code"
							</a>
							{live_link}
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="projects-section">
			<ParticleCanvas config=FieldConfig::projects() />

			<div class="projects-container">
				<div class="projects-header">
					<h2 class="section-title">"My " <span>"Projects"</span></h2>
					<p class="section-subtitle">"Featured work I've built"</p>
				</div>
				<div class="projects-grid">{cards}</div>
			</div>
		</section>
	}
}
