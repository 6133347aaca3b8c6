use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

/// Before/after photo pair, as site-relative image paths.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BeforeAfter {
    pub before: &'static str,
    pub after: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Giulia, 27",
        text: "Dopo il metodo Zero Brufoli la mia pelle è finalmente pulita. Niente più fondotinta pesante!",
    },
    Testimonial {
        name: "Francesca, 41",
        text: "Zero Rughe mi ha ridato tonicità senza aghi. Meri è una professionista impeccabile.",
    },
    Testimonial {
        name: "Sara, 33",
        text: "Diagnosi con microcamera super precisa. Piano personalizzato e risultati visibili in 6 settimane.",
    },
];

// Placeholder paths until the gallery moves to a CDN.
pub static BEFORE_AFTER: [BeforeAfter; 3] = [
    BeforeAfter {
        before: "/ba/before1.jpg",
        after: "/ba/after1.jpg",
    },
    BeforeAfter {
        before: "/ba/before2.jpg",
        after: "/ba/after2.jpg",
    },
    BeforeAfter {
        before: "/ba/before3.jpg",
        after: "/ba/after3.jpg",
    },
];
