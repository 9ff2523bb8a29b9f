//! Static page copy: hosted trips, the hero trip gallery and member reviews.

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub slug: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub dates: &'static str,
    pub summary: &'static str,
    pub host: &'static str,
    pub spots_left: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub trip: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Review {
    /// Filled and empty stars out of five.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
    }
}

pub const HERO_SLIDES: &[(&str, &str)] = &[
    ("Lofoten Islands", "Northern lights from a fisherman's cabin"),
    ("Atlas Mountains", "Three passes, two valleys, one long dinner"),
    ("Azores", "Crater lakes and warm Atlantic swims"),
    ("Dolomites", "Hut to hut along the Alta Via"),
];

pub const HOSTED_TRIPS: &[Trip] = &[
    Trip {
        slug: "lofoten",
        title: "Arctic Light Week",
        location: "Lofoten, Norway",
        dates: "Feb 12 - 19",
        summary: "Hikes by day, aurora watching by night, rorbu cabins on the water.",
        host: "Ingrid",
        spots_left: 3,
    },
    Trip {
        slug: "atlas",
        title: "High Atlas Traverse",
        location: "Imlil, Morocco",
        dates: "Apr 3 - 10",
        summary: "Mule-supported trek between Berber villages with a Toubkal summit option.",
        host: "Youssef",
        spots_left: 5,
    },
    Trip {
        slug: "azores",
        title: "Volcano Islands",
        location: "Sao Miguel, Azores",
        dates: "May 22 - 28",
        summary: "Crater rims, hot springs and a whale-watching morning.",
        host: "Marta",
        spots_left: 2,
    },
    Trip {
        slug: "dolomites",
        title: "Alta Via Huts",
        location: "Dolomites, Italy",
        dates: "Jul 8 - 15",
        summary: "Six rifugio nights on the classic high route.",
        host: "Luca",
        spots_left: 4,
    },
    Trip {
        slug: "patagonia",
        title: "Torres Circuit",
        location: "Patagonia, Chile",
        dates: "Nov 14 - 24",
        summary: "The full O circuit with a small group and a local guide.",
        host: "Camila",
        spots_left: 6,
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Priya",
        trip: "Arctic Light Week",
        quote: "I came alone and left with five friends and a camera roll of green skies.",
        rating: 5,
    },
    Review {
        author: "Tom",
        trip: "High Atlas Traverse",
        quote: "Every detail was handled. I only had to walk and eat.",
        rating: 5,
    },
    Review {
        author: "Aiko",
        trip: "Volcano Islands",
        quote: "Small group, big days. Marta knew every trail.",
        rating: 4,
    },
    Review {
        author: "Sam",
        trip: "Alta Via Huts",
        quote: "The huts were the highlight. So was the polenta.",
        rating: 5,
    },
    Review {
        author: "Lena",
        trip: "Torres Circuit",
        quote: "Hard, windy and worth every step.",
        rating: 5,
    },
    Review {
        author: "Diego",
        trip: "Arctic Light Week",
        quote: "Booked the next one before the flight home.",
        rating: 4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_out_of_five() {
        let review = Review {
            author: "A",
            trip: "T",
            quote: "Q",
            rating: 4,
        };
        assert_eq!(review.stars(), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
    }

    #[test]
    fn trip_slugs_are_unique() {
        let mut slugs: Vec<_> = HOSTED_TRIPS.iter().map(|t| t.slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), HOSTED_TRIPS.len());
    }
}
