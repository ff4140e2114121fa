//! Card grid of social profiles.

use leptos::prelude::*;

use crate::context::LanguageSignal;
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSize {
	Small,
	Medium,
	Large,
}

impl CardSize {
	/// Grid class; large cards span two columns from the `sm` breakpoint up.
	pub fn grid_class(self) -> &'static str {
		match self {
			CardSize::Large => "card card-wide",
			CardSize::Medium | CardSize::Small => "card",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
	pub platform: &'static str,
	pub url: &'static str,
	pub handle: &'static str,
	pub display_name: &'static str,
	/// Brand color as `#rrggbb` or `#rgb`.
	pub color: &'static str,
	pub size: CardSize,
	pub featured: bool,
}

impl SocialLink {
	/// Inline style tinting the icon badge with the brand color.
	pub fn badge_style(&self) -> String {
		let color = Color::parse_hex(self.color).unwrap_or_default();
		format!(
			"background-color: {}; color: {};",
			color.to_hex_alpha(0x20 as f64 / 255.0),
			color
		)
	}
}

pub const SOCIAL_LINKS: [SocialLink; 7] = [
	SocialLink {
		platform: "Instagram",
		url: "https://www.instagram.com/ardaannyy",
		handle: "@ardaannyy",
		display_name: "Instagram",
		color: "#E4405F",
		size: CardSize::Large,
		featured: false,
	},
	SocialLink {
		platform: "YouTube",
		url: "https://www.youtube.com/channel/UC_HCI02Lu4sCLH2j7soRWQg",
		handle: "Danny",
		display_name: "YouTube",
		color: "#FF0000",
		size: CardSize::Medium,
		featured: false,
	},
	SocialLink {
		platform: "TikTok",
		url: "https://www.tiktok.com/@ardaannyy",
		handle: "@ardaannyy",
		display_name: "TikTok",
		color: "#000000",
		size: CardSize::Medium,
		featured: false,
	},
	SocialLink {
		platform: "Twitter",
		url: "https://x.com/daanny62",
		handle: "@daanny62",
		display_name: "Twitter",
		color: "#1DA1F2",
		size: CardSize::Small,
		featured: false,
	},
	SocialLink {
		platform: "Discord",
		url: "https://discord.gg/j9tWaJ8HSz",
		handle: "DANNY GRAPICH STORE",
		display_name: "Discord Server",
		color: "#5865F2",
		size: CardSize::Medium,
		featured: false,
	},
	SocialLink {
		platform: "GitHub",
		url: "https://github.com/ardannydev",
		handle: "ardannydev",
		display_name: "GitHub",
		color: "#333",
		size: CardSize::Large,
		featured: false,
	},
	SocialLink {
		platform: "Saweria",
		url: "https://saweria.co/ardanny",
		handle: "Support",
		display_name: "Saweria",
		color: "#FFAA00",
		size: CardSize::Large,
		featured: true,
	},
];

#[component]
pub fn SocialGrid() -> impl IntoView {
	let language = expect_context::<LanguageSignal>();

	let cards = SOCIAL_LINKS
		.iter()
		.map(|link| {
			let class = if link.featured {
				format!("{} card-featured", link.size.grid_class())
			} else {
				link.size.grid_class().to_string()
			};
			view! {
				<div class=class>
					<a href=link.url target="_blank" rel="noopener noreferrer" class="card-link">
						<div class="card-badge" style=link.badge_style()>
							{link.platform.chars().next().map(String::from)}
						</div>
						<div class="card-text">
							<h3>{link.display_name}</h3>
							<p>{link.handle}</p>
						</div>
						{link.featured.then(|| view! { <span class="card-featured-badge">"Featured"</span> })}
					</a>
				</div>
			}
		})
		.collect_view();

	view! {
		<section class="social">
			<div class="social-header">
				<h1>{move || language.t("socialTitle")}</h1>
				<p>{move || language.t("socialSubtitle")}</p>
			</div>
			<div class="social-grid">{cards}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exactly_one_featured_link() {
		let featured: Vec<_> = SOCIAL_LINKS.iter().filter(|l| l.featured).collect();
		assert_eq!(featured.len(), 1);
		assert_eq!(featured[0].platform, "Saweria");
	}

	#[test]
	fn test_every_brand_color_parses() {
		for link in &SOCIAL_LINKS {
			assert!(Color::parse_hex(link.color).is_some(), "{}", link.platform);
			assert!(link.url.starts_with("https://"));
		}
	}

	#[test]
	fn test_badge_style_uses_translucent_brand_color() {
		let github = SOCIAL_LINKS.iter().find(|l| l.platform == "GitHub").unwrap();
		assert_eq!(
			github.badge_style(),
			"background-color: #33333320; color: #333333;"
		);
	}
}
