//! English and Indonesian copy for the site.

use serde::{Deserialize, Serialize};

/// A language the site can be displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
	#[default]
	English,
	Indonesian,
}

impl Language {
	pub const ALL: [Language; 2] = [Language::English, Language::Indonesian];

	/// ISO 639-1 code.
	pub fn code(self) -> &'static str {
		match self {
			Language::English => "en",
			Language::Indonesian => "id",
		}
	}

	/// Name shown in the language selector.
	pub fn name(self) -> &'static str {
		match self {
			Language::English => "English",
			Language::Indonesian => "Indonesia",
		}
	}

	pub fn flag(self) -> &'static str {
		match self {
			Language::English => "🇺🇸",
			Language::Indonesian => "🇮🇩",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|l| l.code() == code)
	}

	pub fn translations(self) -> &'static Translations {
		match self {
			Language::English => &EN,
			Language::Indonesian => &ID,
		}
	}

	/// Look up `key` in this language, then in English, then return the key itself.
	pub fn translate(self, key: &str) -> String {
		self.translations()
			.get(key)
			.or_else(|| EN.get(key))
			.map(str::to_string)
			.unwrap_or_else(|| key.to_string())
	}

	pub fn to_record(self) -> LanguageRecord {
		LanguageRecord {
			code: self.code().to_string(),
			name: self.name().to_string(),
			flag: self.flag().to_string(),
		}
	}
}

/// Serialized form of a language choice: `{"code":"en","name":"English","flag":"🇺🇸"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageRecord {
	pub code: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub flag: String,
}

/// All user-facing strings for one language.
#[derive(Debug)]
pub struct Translations {
	pub hero_title: &'static str,
	pub hero_subtitle: &'static str,
	pub hero_description: &'static str,
	pub hero_button: &'static str,

	pub nav_home: &'static str,
	pub nav_about: &'static str,
	pub nav_contact: &'static str,

	pub social_title: &'static str,
	pub social_subtitle: &'static str,
	pub social_cta: &'static str,

	pub about_title: &'static str,
	pub contact_title: &'static str,

	pub maintenance_title: &'static str,
	pub maintenance_notice: &'static str,
	pub maintenance_redirect: &'static str,
	pub maintenance_seconds: &'static str,
	pub maintenance_footer: &'static str,

	pub footer_copyright: &'static str,
	pub footer_support: &'static str,
}

impl Translations {
	/// Look up a string by its camelCase key (e.g. `"heroTitle"`). Empty entries count as missing.
	pub fn get(&self, key: &str) -> Option<&'static str> {
		let value = match key {
			"heroTitle" => self.hero_title,
			"heroSubtitle" => self.hero_subtitle,
			"heroDescription" => self.hero_description,
			"heroButton" => self.hero_button,
			"navHome" => self.nav_home,
			"navAbout" => self.nav_about,
			"navContact" => self.nav_contact,
			"socialTitle" => self.social_title,
			"socialSubtitle" => self.social_subtitle,
			"socialCTA" => self.social_cta,
			"aboutTitle" => self.about_title,
			"contactTitle" => self.contact_title,
			"maintenanceTitle" => self.maintenance_title,
			"maintenanceNotice" => self.maintenance_notice,
			"maintenanceRedirect" => self.maintenance_redirect,
			"maintenanceSeconds" => self.maintenance_seconds,
			"maintenanceFooter" => self.maintenance_footer,
			"footerCopyright" => self.footer_copyright,
			"footerSupport" => self.footer_support,
			_ => return None,
		};
		(!value.is_empty()).then_some(value)
	}
}

static EN: Translations = Translations {
	hero_title: "Hello, I'm Danny",
	hero_subtitle: "Content Creator & Developer",
	hero_description: "I'm a content creator focused on technology, programming, and sharing knowledge through digital platforms. Let's create something amazing together!",
	hero_button: "View My Work",

	nav_home: "Home",
	nav_about: "About",
	nav_contact: "Contact",

	social_title: "Connect With Me",
	social_subtitle: "Explore various platforms where I share content and interact with the community",
	social_cta: "Let's connect and collaborate to create something extraordinary! 🚀",

	about_title: "About Me",
	contact_title: "Get In Touch",

	maintenance_title: "Page Under Maintenance",
	maintenance_notice: "Currently being worked on",
	maintenance_redirect: "Returning to the home page in:",
	maintenance_seconds: "seconds",
	maintenance_footer: "This page will be back once maintenance is finished",

	footer_copyright: "© 2024 All rights reserved",
	footer_support: "Support",
};

static ID: Translations = Translations {
	hero_title: "Halo, Saya Danny",
	hero_subtitle: "Content Creator & Developer",
	hero_description: "Saya seorang content creator yang berfokus pada teknologi, programming, dan berbagi pengetahuan melalui platform digital. Mari berkarya bersama!",
	hero_button: "Lihat Karya Saya",

	nav_home: "Beranda",
	nav_about: "Tentang",
	nav_contact: "Kontak",

	social_title: "Terhubung Dengan Saya",
	social_subtitle: "Jelajahi berbagai platform tempat saya berbagi konten dan berinteraksi dengan komunitas",
	social_cta: "Mari terhubung dan berkolaborasi untuk menciptakan sesuatu yang luar biasa! 🚀",

	about_title: "Tentang Saya",
	contact_title: "Hubungi Saya",

	maintenance_title: "Halaman Dalam Maintenance",
	maintenance_notice: "Sedang dalam perbaikan",
	maintenance_redirect: "Akan kembali ke beranda dalam:",
	maintenance_seconds: "detik",
	maintenance_footer: "Halaman akan kembali normal setelah maintenance selesai",

	footer_copyright: "© 2024 Hak cipta dilindungi",
	footer_support: "",
};
