//! Page footer: about blurb, quick links, contact info, copyright.

use leptos::prelude::*;

use super::NAV_LINKS;
use crate::profile::{ContactMethod, SocialLink};

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer(
	name: String,
	summary: String,
	methods: Vec<ContactMethod>,
	socials: Vec<SocialLink>,
) -> impl IntoView {
	let quick_links = NAV_LINKS
		.iter()
		.map(|&(id, label)| {
			view! {
				<li>
					<a href=format!("#{id}") class="footer-link">
						{label}
					</a>
				</li>
			}
		})
		.collect_view();

	let social_items = socials
		.into_iter()
		.map(|SocialLink { label, href }| {
			view! {
				<a
					href=href
					target="_blank"
					rel="noopener noreferrer"
					aria-label=label.clone()
					class="social-icon"
				>
					{label.clone()}
				</a>
			}
		})
		.collect_view();

	let contact_items = methods
		.into_iter()
		.map(|ContactMethod { value, href, .. }| {
			view! {
				<li>
					<a href=href target="_blank" rel="noopener noreferrer" class="contact-item">
						{value}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<footer class="footer">
			<div class="footer-container">
				<div class="footer-content">
					<div class="footer-section">
						<h3 class="footer-heading">"About Me"</h3>
						<p class="footer-about">{summary}</p>
						<div class="footer-social">{social_items}</div>
					</div>

					<div class="footer-section">
						<h3 class="footer-heading">"Quick Links"</h3>
						<ul class="footer-links">{quick_links}</ul>
					</div>

					<div class="footer-section">
						<h3 class="footer-heading">"Contact"</h3>
						<ul class="footer-contact">{contact_items}</ul>
					</div>
				</div>

				<div class="footer-bottom">
					<p class="copyright">
						{format!("\u{a9} {} {}. All rights reserved.", current_year(), name)}
					</p>
					<p class="footer-note">"Built with Rust and Leptos"</p>
				</div>
			</div>
		</footer>
	}
}
