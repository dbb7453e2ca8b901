// src/application/i18n.rs
//! Static UI copy per locale.

use crate::domain::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Home,
    About,
    Blog,
    News,
}

#[derive(Debug)]
pub struct Messages {
    pub home: &'static str,
    pub about: &'static str,
    pub blog: &'static str,
    pub news: &'static str,
    pub home_description: &'static str,
    pub about_description: &'static str,
    pub blog_description: &'static str,
    pub news_description: &'static str,
    pub read_more: &'static str,
    pub not_found_title: &'static str,
    pub not_found_description: &'static str,
    pub back_home: &'static str,
    pub preview_message: &'static str,
    pub preview_exit: &'static str,
    pub hero_tagline: &'static str,
    pub listing_heading: &'static str,
    pub listing_tagline: &'static str,
}

static EN: Messages = Messages {
    home: "Home",
    about: "About Us",
    blog: "Blog",
    news: "News",
    home_description: "Trusted global innovator of IT and business services.",
    about_description: "Learn who we are, what we value and how we work.",
    blog_description: "Insights and perspectives from our experts.",
    news_description: "The latest announcements and press releases.",
    read_more: "Read More",
    not_found_title: "Page Not Found",
    not_found_description: "The page you are looking for does not exist or has been moved.",
    back_home: "Back to Home",
    preview_message: "You are viewing draft content.",
    preview_exit: "Exit Preview",
    hero_tagline: "Elevate customer experiences with us",
    listing_heading: "Focus",
    listing_tagline: "Discover our group initiatives",
};

static MS: Messages = Messages {
    home: "Laman Utama",
    about: "Tentang Kami",
    blog: "Blog",
    news: "Berita",
    home_description: "Inovator global yang dipercayai dalam perkhidmatan IT dan perniagaan.",
    about_description: "Ketahui siapa kami, nilai kami dan cara kami bekerja.",
    blog_description: "Pandangan dan perspektif daripada pakar kami.",
    news_description: "Pengumuman dan kenyataan akhbar terkini.",
    read_more: "Baca Lagi",
    not_found_title: "Halaman Tidak Dijumpai",
    not_found_description: "Halaman yang anda cari tidak wujud atau telah dipindahkan.",
    back_home: "Kembali ke Laman Utama",
    preview_message: "Anda sedang melihat kandungan draf.",
    preview_exit: "Keluar Pratonton",
    hero_tagline: "Tingkatkan pengalaman pelanggan bersama kami",
    listing_heading: "Fokus",
    listing_tagline: "Terokai inisiatif kumpulan kami",
};

pub const fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &EN,
        Locale::Ms => &MS,
    }
}

impl Messages {
    pub const fn title(&self, page: PageKey) -> &'static str {
        match page {
            PageKey::Home => self.home,
            PageKey::About => self.about,
            PageKey::Blog => self.blog,
            PageKey::News => self.news,
        }
    }

    pub const fn description(&self, page: PageKey) -> &'static str {
        match page {
            PageKey::Home => self.home_description,
            PageKey::About => self.about_description,
            PageKey::Blog => self.blog_description,
            PageKey::News => self.news_description,
        }
    }
}
