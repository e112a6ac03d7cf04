//! Contact section: contact channels plus a locally validated form.
//!
//! Submission does not go over the network; the email relay used by the
//! deployed site is an external collaborator. A valid submission is logged
//! and acknowledged with a success message.

use leptos::prelude::*;
use log::info;

use crate::components::particle_field::{FieldConfig, ParticleCanvas};
use crate::profile::{ContactMethod, SocialLink};

/// Shortest message body that is accepted.
const MIN_MESSAGE_LEN: usize = 10;

/// Per-field validation errors; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
	pub name: Option<&'static str>,
	pub email: Option<&'static str>,
	pub subject: Option<&'static str>,
	pub message: Option<&'static str>,
}

impl FormErrors {
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}
}

/// Minimal well-formedness check: one `@` with a dotted, non-empty domain.
fn email_is_valid(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
		return false;
	}
	domain.split('.').filter(|part| !part.is_empty()).count() >= 2
		&& domain.split('.').all(|part| !part.is_empty())
}

/// Validate the whole form at once.
fn validate(name: &str, email: &str, subject: &str, message: &str) -> FormErrors {
	FormErrors {
		name: name.trim().is_empty().then_some("Name is required"),
		email: if email.trim().is_empty() {
			Some("Email is required")
		} else if !email_is_valid(email.trim()) {
			Some("Invalid email address")
		} else {
			None
		},
		subject: subject.trim().is_empty().then_some("Subject is required"),
		message: (message.trim().chars().count() < MIN_MESSAGE_LEN)
			.then_some("Message must be at least 10 characters"),
	}
}

#[component]
pub fn Contact(methods: Vec<ContactMethod>, socials: Vec<SocialLink>) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let subject = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let errors = RwSignal::new(FormErrors::default());
	let sent = RwSignal::new(false);

	let on_submit = move |ev: web_sys::SubmitEvent| {
		ev.prevent_default();
		let result = validate(
			&name.get(),
			&email.get(),
			&subject.get(),
			&message.get(),
		);
		if result.is_empty() {
			info!(
				"contact form submitted: {} <{}> / {}",
				name.get(),
				email.get(),
				subject.get()
			);
			name.set(String::new());
			email.set(String::new());
			subject.set(String::new());
			message.set(String::new());
			sent.set(true);
		} else {
			sent.set(false);
		}
		errors.set(result);
	};

	let method_items = methods
		.into_iter()
		.map(|ContactMethod { label, value, href }| {
			view! {
				<a href=href target="_blank" rel="noopener noreferrer" class="contact-method">
					<h4>{label}</h4>
					<p>{value}</p>
				</a>
			}
		})
		.collect_view();

	let social_items = socials
		.into_iter()
		.map(|SocialLink { label, href }| {
			view! {
				<a href=href target="_blank" rel="noopener noreferrer" class="social-icon">
					{label}
				</a>
			}
		})
		.collect_view();

	let field_error = move |pick: fn(&FormErrors) -> Option<&'static str>| {
		move || {
			errors
				.with(|e| pick(e))
				.map(|msg| view! { <span class="error-message">{msg}</span> })
		}
	};

	view! {
		<section id="contact" class="contact-section">
			<ParticleCanvas config=FieldConfig::contact() />

			<div class="contact-container">
				<div class="contact-header">
					<h2 class="section-title">"Get In " <span>"Touch"</span></h2>
					<p class="section-subtitle">"Connect with me through multiple channels"</p>
				</div>

				<div class="contact-content">
					<div class="contact-info">
						<h3>"Contact Information"</h3>
						<div class="contact-methods">{method_items}</div>
						<div class="social-links">
							<h4>"Follow Me"</h4>
							<div class="social-icons">{social_items}</div>
						</div>
					</div>

					<form class="contact-form" on:submit=on_submit>
						<Show when=move || sent.get()>
							<div class="success-message">"Message sent successfully!"</div>
						</Show>

						<div class="form-group">
							<input
								type="text"
								placeholder="Your Name"
								prop:value=move || name.get()
								on:input=move |ev| name.set(event_target_value(&ev))
							/>
							{field_error(|e| e.name)}
						</div>

						<div class="form-group">
							<input
								type="email"
								placeholder="Your Email"
								prop:value=move || email.get()
								on:input=move |ev| email.set(event_target_value(&ev))
							/>
							{field_error(|e| e.email)}
						</div>

						<div class="form-group">
							<input
								type="text"
								placeholder="Subject"
								prop:value=move || subject.get()
								on:input=move |ev| subject.set(event_target_value(&ev))
							/>
							{field_error(|e| e.subject)}
						</div>

						<div class="form-group">
							<textarea
								placeholder="Your Message"
								rows="4"
								prop:value=move || message.get()
								on:input=move |ev| message.set(event_target_value(&ev))
							></textarea>
							{field_error(|e| e.message)}
						</div>

						<button type="submit" class="submit-btn">
							"Send Message"
						</button>
					</form>
				</div>
			</div>
		</section>
	}
}
