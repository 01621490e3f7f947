/// A service card in the "Professional Services" grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub credit: &'static str,
}

pub static SERVICES: [Service; 4] = [
    Service {
        title: "eBook Formatting",
        description: "I format your eBook for Kindle, PDF, EPUB and other platforms so that it looks clean and professional.",
        image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=300&fit=crop",
    },
    Service {
        title: "Cover Design",
        description: "Simple, clean and attractive covers that fit your genre and get attention from potential readers.",
        image: "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=400&h=300&fit=crop",
    },
    Service {
        title: "Launch Strategy",
        description: "I help you promote your book to the right audience with a simple launch plan that actually works.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop",
    },
    Service {
        title: "Community Growth",
        description: "I share your book in active reading communities so you can grow your readers and get more views.",
        image: "https://images.unsplash.com/photo-1521737711867-e3b97375f902?w=400&h=300&fit=crop",
    },
];

pub static TESTIMONIAL: Testimonial = Testimonial {
    quote: "Working with Katie completely changed how my book looked. Readers are commenting on how professional and clean the format feels. My sales jumped within days of launch.",
    author: "Maria Santos",
    credit: "Author of Whispers of Dawn",
};

/// Cover images for the "My Works" strip
pub static WORKS: [&str; 5] = [
    "https://images.unsplash.com/photo-1543002588-bfa74002ed7a?w=300&h=450&fit=crop",
    "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=300&h=450&fit=crop",
    "https://images.unsplash.com/photo-1581578731548-9d101ab9535b?w=300&h=450&fit=crop",
    "https://images.unsplash.com/photo-1608043152266-472d5b29bfd9?w=300&h=450&fit=crop",
    "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=300&h=450&fit=crop",
];
