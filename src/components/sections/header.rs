//! Fixed page header with anchor navigation and a mobile menu toggle.

use leptos::prelude::*;

use super::NAV_LINKS;

#[component]
pub fn Header(
	/// Site owner name shown as the logo text.
	name: String,
) -> impl IntoView {
	let menu_open = RwSignal::new(false);

	let desktop_items = NAV_LINKS
		.iter()
		.map(|&(id, label)| {
			view! {
				<a href=format!("#{id}") class="nav-link">
					{label}
				</a>
			}
		})
		.collect_view();

	view! {
		<header class="header">
			<div class="header-container">
				<a href="#home" class="logo-link">
					{name}
				</a>

				<nav class="desktop-nav">{desktop_items}</nav>

				<button
					class="mobile-menu-btn"
					aria-label="Toggle navigation"
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>

				<Show when=move || menu_open.get()>
					<div class="mobile-nav">
						<nav class="mobile-nav-links">
							{NAV_LINKS
								.iter()
								.map(|&(id, label)| {
									view! {
										<a
											href=format!("#{id}")
											class="mobile-nav-link"
											on:click=move |_| menu_open.set(false)
										>
											{label}
										</a>
									}
								})
								.collect_view()}
						</nav>
					</div>
				</Show>
			</div>
		</header>
	}
}
