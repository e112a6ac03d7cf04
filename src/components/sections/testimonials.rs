//! Testimonials carousel with wrapping previous/next navigation.

use leptos::prelude::*;

use crate::profile::Testimonial;

/// Step a carousel index by one, wrapping at both ends.
fn step_index(current: usize, len: usize, forward: bool) -> usize {
	if len == 0 {
		return 0;
	}
	if forward {
		(current + 1) % len
	} else if current == 0 {
		len - 1
	} else {
		current - 1
	}
}

fn stars(rating: u8) -> String {
	let filled = usize::from(rating.min(5));
	"\u{2605}".repeat(filled) + &"\u{2606}".repeat(5 - filled)
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
	let count = testimonials.len();
	let current = RwSignal::new(0usize);

	let entries = StoredValue::new(testimonials);

	let card = move || {
		entries.with_value(|list| {
			list.get(current.get()).map(|t| {
				view! {
					<div class="testimonial-card">
						<div class="star-rating">{stars(t.rating)}</div>
						<p class="testimonial-content">{t.quote.clone()}</p>
						<div class="testimonial-author">
							<h4>{t.name.clone()}</h4>
							<p>{t.role.clone()}</p>
						</div>
					</div>
				}
			})
		})
	};

	let dots = move || {
		(0..count)
			.map(|i| {
				view! {
					<button
						class=move || if current.get() == i { "dot active" } else { "dot" }
						aria-label=format!("Go to testimonial {}", i + 1)
						on:click=move |_| current.set(i)
					></button>
				}
			})
			.collect_view()
	};

	view! {
		<section id="testimonials" class="testimonials-section">
			<div class="testimonials-container">
				<div class="testimonials-header">
					<h2 class="section-title">"Client " <span>"Testimonials"</span></h2>
					<p class="section-subtitle">"What people say about my work"</p>
				</div>

				<div class="testimonials-carousel">
					<button
						class="carousel-btn prev-btn"
						aria-label="Previous testimonial"
						on:click=move |_| current.update(|i| *i = step_index(*i, count, false))
					>
						"\u{2039}"
					</button>

					{card}

					<button
						class="carousel-btn next-btn"
						aria-label="Next testimonial"
						on:click=move |_| current.update(|i| *i = step_index(*i, count, true))
					>
						"\u{203a}"
					</button>
				</div>

				<div class="carousel-dots">{dots}</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn forward_steps_wrap_to_zero() {
		assert_eq!(step_index(0, 3, true), 1);
		assert_eq!(step_index(1, 3, true), 2);
		assert_eq!(step_index(2, 3, true), 0);
	}

	#[test]
	fn backward_steps_wrap_to_last() {
		assert_eq!(step_index(2, 3, false), 1);
		assert_eq!(step_index(1, 3, false), 0);
		assert_eq!(step_index(0, 3, false), 2);
	}

	#[test]
	fn empty_carousel_stays_at_zero() {
		assert_eq!(step_index(0, 0, true), 0);
		assert_eq!(step_index(0, 0, false), 0);
	}

	#[test]
	fn star_line_always_holds_five_glyphs() {
		assert_eq!(stars(0).chars().count(), 5);
		assert_eq!(stars(4).chars().count(), 5);
		// Out-of-range ratings clamp instead of overflowing.
		assert_eq!(stars(9).chars().count(), 5);
		assert_eq!(stars(5), "\u{2605}".repeat(5));
	}
}
