//! Skills section: grouped proficiency bars.

use leptos::prelude::*;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::profile::SkillGroup;

#[component]
pub fn Skills(groups: Vec<SkillGroup>) -> impl IntoView {
	let rendered = groups
		.into_iter()
		.map(|group| {
			let cards = group
				.skills
				.into_iter()
				.map(|skill| {
					let bar_style = format!(
						"width: {}%; background-color: {};",
						skill.level.min(100),
						skill.color
					);
					view! {
						<div class="skill-card">
							<div class="skill-info">
								<h3>{skill.name}</h3>
								<div class="skill-bar">
									<div class="skill-progress" style=bar_style></div>
								</div>
								<span class="skill-percent">{skill.level} "%"</span>
							</div>
						</div>
					}
				})
				.collect_view();

			view! {
				<div class="skills-category">
					<h2 class="category-title">{group.title}</h2>
					<div class="skills-grid">{cards}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="skills" class="skills-section">
			<ParticleCanvas config=FieldConfig::skills() />
			<div class="skills-container">{rendered}</div>
		</section>
	}
}
