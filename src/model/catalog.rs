//! The fixed podcast catalog and title filtering
//!
//! The catalog is a process-wide constant: eight entries, built into the
//! binary, never mutated at runtime. Its order is the display order and
//! filtering preserves it.

/// Opaque reference to a bundled image asset. Resolving it to something
/// renderable is a presentation concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(asset: &'static str) -> Self {
        Self(asset)
    }

    pub fn asset_name(&self) -> &'static str {
        self.0
    }
}

/// A single podcast entry.
///
/// `audio_url` is carried on the record for completeness but no behavior
/// consumes it; nothing in this application plays audio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Podcast {
    pub title: &'static str,
    pub description: &'static str,
    pub website_url: &'static str,
    #[allow(dead_code)]
    pub audio_url: &'static str,
    pub image: ImageRef,
}

static CATALOG: [Podcast; 8] = [
    Podcast {
        title: "The Daily",
        description: "News from NYT",
        website_url: "https://nytimes.com",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
        image: ImageRef::new("the_daily"),
    },
    Podcast {
        title: "99% Invisible",
        description: "Design & architecture",
        website_url: "https://99percentinvisible.org",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        image: ImageRef::new("invincible"),
    },
    Podcast {
        title: "SmartLess",
        description: "Celebrity interviews",
        website_url: "https://www.smartless.com",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
        image: ImageRef::new("smartless"),
    },
    Podcast {
        title: "Science Vs",
        description: "Debunking fads with science",
        website_url: "https://gimletmedia.com/shows/science-vs",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
        image: ImageRef::new("science_vs"),
    },
    Podcast {
        title: "Stuff You Should Know",
        description: "How stuff works explained",
        website_url: "https://stuffyoushouldknow.com",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
        image: ImageRef::new("stuff_you"),
    },
    Podcast {
        title: "Crime Junkie",
        description: "True crime stories told weekly.",
        website_url: "https://crimejunkiepodcast.com",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-6.mp3",
        image: ImageRef::new("crime_junkie"),
    },
    Podcast {
        title: "The Joe Rogan Experience",
        description: "Long-form conversations with guests",
        website_url: "https://open.spotify.com/show/4rOoJ6Egrf8K2IrywzwOMk",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-7.mp3",
        image: ImageRef::new("joe_rogan"),
    },
    Podcast {
        title: "The Diary of a CEO",
        description: "Conversations on life, business & mental health",
        website_url: "https://www.diaryofaceo.com",
        audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-8.mp3",
        image: ImageRef::new("diary_ceo"),
    },
];

/// The full catalog in display order.
pub fn catalog() -> &'static [Podcast] {
    &CATALOG
}

/// Case-insensitive substring filter over podcast titles, preserving catalog
/// order. The empty query matches every entry. Descriptions and URLs are
/// never matched.
pub fn filter_catalog(query: &str) -> Vec<&'static Podcast> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}
