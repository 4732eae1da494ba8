//! Seed population.
//!
//! The store ships with a fixed reference dataset: three characters, ten
//! time capsule items each. [`populate`] drives the dataset through the
//! public `create_*` operations so the seeded records go through the same id
//! assignment and default substitution as any other record.
//!
//! Seeding is deterministic: two freshly seeded stores hold identical
//! records with identical ids in identical order.

use capsule_core::{CharacterId, NewCharacter, NewItem};

use crate::Store;

/// Populate `store` with the reference dataset.
///
/// Runs synchronously to completion; [`MemoryStore::seeded`](crate::MemoryStore::seeded)
/// calls this before handing the store out, so no reader can observe a
/// partially seeded state.
pub fn populate(store: &impl Store) {
    let bria = store.create_character(NewCharacter {
        name: "Bria Reign".into(),
        traits: vec![
            "Chronically online".into(),
            "Sassy".into(),
            "Culturally fluent".into(),
        ],
        avatar: "/images/bria.jpeg".into(),
        bio: "Has strong opinions on everything from Wordle to world politics — often in the same sentence. Drama-aware but claims she doesn't do drama (she does). Emotionally intelligent in DMs, chaotic neutral in public comments.".into(),
        border_color: Some("primary".into()),
    });

    let jax = store.create_character(NewCharacter {
        name: "Jax".into(),
        traits: vec!["Tech bro".into(), "Builder".into(), "Optimizer".into()],
        avatar: "/images/jax.jpeg".into(),
        bio: "Addicted to building things no one asked for. Thinks sleep is 'just an optional downtime process'. Always between burnouts but will never admit it. Lowkey self-aware, highkey obsessed with optimization.".into(),
        border_color: Some("secondary".into()),
    });

    let luca = store.create_character(NewCharacter {
        name: "Luca Saint".into(),
        traits: vec![
            "NYC fashion student".into(),
            "Elegant".into(),
            "Eccentric".into(),
        ],
        avatar: "/images/luca.jpeg".into(),
        bio: "Blends irony with sincerity like it's an outfit choice. Has resting 'don't talk to me unless you're art' face. Says more in a moodboard than most say in a novel.".into(),
        border_color: Some("accent".into()),
    });

    seed_bria_items(store, bria.id);
    seed_jax_items(store, jax.id);
    seed_luca_items(store, luca.id);

    tracing::debug!(
        characters = store.list_characters().len(),
        items = store.list_items().len(),
        "seed population complete"
    );
}

fn item(
    character_id: CharacterId,
    title: &str,
    description: &str,
    significance: &str,
    category: &str,
    resource: &str,
) -> NewItem {
    NewItem {
        character_id,
        title: title.into(),
        description: description.into(),
        significance: significance.into(),
        category: category.into(),
        resource: Some(resource.into()),
    }
}

fn seed_bria_items(store: &impl Store, bria: CharacterId) {
    store.create_item(item(
        bria,
        "BBL Drake",
        "Viral video capturing Drake's rumored Brazilian Butt Lift surgery controversy. This explosive meme sparked weeks of social media frenzy, highlighting the intersection of celebrity culture, beauty standards, and internet humor.",
        "This moment exemplifies how quickly internet culture could transform serious topics into viral entertainment, blending celebrity gossip with broader conversations about body image and authenticity.",
        "Entertainment",
        "Original video with 124M views",
    ));

    store.create_item(item(
        bria,
        "Love Island Drama Compilation",
        "A curated collection of the most iconic moments from the reality show that defined an era of dating culture. From shocking recouplings to iconic catchphrases, this archive captures the cultural phenomenon in all its chaotic glory.",
        "Reality dating shows shaped relationship expectations and created shared cultural references for an entire generation, influencing everything from dating app behavior to relationship language.",
        "Entertainment",
        "Supercut of most-viewed moments",
    ));

    store.create_item(item(
        bria,
        "Threads First-Week Archive",
        "Complete record of the chaotic first week of Meta's Twitter alternative launch. This archive captures the platform's explosive growth, celebrity migrations, and the uniquely unhinged content created during its early adoption phase.",
        "The Threads launch represented a pivotal moment in social media history, as users migrated platforms en masse following Twitter's controversial changes, reshaping the digital public square overnight.",
        "Technology",
        "Complete first-week post archive",
    ));

    store.create_item(item(
        bria,
        "Wordle Score Archive",
        "Complete collection of those little green and yellow squares that took over everyone's timeline in 2022. This archive includes the daily puzzles, solution statistics, and the most viral score shares that dominated social feeds.",
        "Wordle created a rare moment of collective daily ritual across the internet, bringing lighthearted competition and shared experience to millions during a time of ongoing social isolation.",
        "Entertainment",
        "Complete puzzle archive with statistics",
    ));

    store.create_item(item(
        bria,
        "TikTok Dance Evolution",
        "Comprehensive archive of trending TikTok dances that defined an era of viral movement. From simple hand gestures to elaborate choreography, this collection documents how dance crazes spread globally through social platforms.",
        "TikTok dances created a new form of global cultural exchange, allowing anyone to participate in trending movements regardless of geographic location, transforming how dance evolved and spread.",
        "Culture",
        "Evolution timeline with creator credits",
    ));

    store.create_item(item(
        bria,
        "Drake vs. Kendrick Beef",
        "Complete archive of the legendary hip-hop feud that captivated the internet. This collection includes every diss track, social media response, and the real-time reactions that turned this rivalry into a cultural watershed moment.",
        "This rap battle transcended music to become a global conversation, highlighting how social media transformed artistic feuds into participatory entertainment events with unprecedented audience engagement.",
        "Entertainment",
        "Complete audio archive with annotation",
    ));

    store.create_item(item(
        bria,
        "Met Gala Red Carpet Archive",
        "Comprehensive visual documentation of fashion's biggest night. This archive captures the most iconic, controversial, and meme-worthy looks that defined contemporary celebrity fashion and sparked endless social media debates.",
        "The Met Gala evolved from an elite fashion event to a globally discussed cultural moment, where outfit choices became statements analyzed and debated across social platforms.",
        "Fashion",
        "Interactive timeline with designer interviews",
    ));

    store.create_item(item(
        bria,
        "TikTok Ban Controversy",
        "Complete documentation of the political and cultural battle over TikTok's future in America. This archive includes government hearings, creator responses, and the unprecedented campaign to save a social platform from regulation.",
        "The TikTok ban debate highlighted the complex intersection of national security, youth culture, and the growing influence of creator economies in shaping political discourse and policy outcomes.",
        "Politics",
        "Complete congressional testimony archive",
    ));

    store.create_item(item(
        bria,
        "Reels Brain Rot",
        "Curated collection of the most hypnotically addictive short-form content that defined the scrolling generation. From oddly satisfying videos to inexplicably viral moments, this archive captures the strange allure of endless content.",
        "Short-form video algorithms created unprecedented changes in attention spans and content consumption, fostering a unique cultural condition where users found themselves unable to stop consuming increasingly fragmented content.",
        "Psychology",
        "Attention impact study with viewer data",
    ));

    store.create_item(item(
        bria,
        "We Did It Joe - Kamala Harris Edit",
        "The viral video of Vice President Harris' spontaneous phone call that launched a thousand remixes. This archive contains the original clip and its evolution into a cultural touchstone through countless edits and applications.",
        "This moment demonstrated how political events were increasingly processed through remix culture, transforming authentic reactions into versatile meme templates that extended far beyond their original political context.",
        "Politics",
        "Complete remix evolution timeline",
    ));
}

fn seed_jax_items(store: &impl Store, jax: CharacterId) {
    store.create_item(item(
        jax,
        "Vision Pro Unboxing",
        "Comprehensive first-look at Apple's revolutionary spatial computing headset. This detailed exploration captures the device's capabilities, limitations, and the varied reactions to what was meant to be the future of computing.",
        "The Vision Pro represented a pivotal attempt to move computing beyond screens into spatial integration, marking a significant moment in the evolution of human-computer interaction regardless of its commercial success.",
        "Technology",
        "Complete teardown with technical specifications",
    ));

    store.create_item(item(
        jax,
        "Elon's Twitter Takeover Timeline",
        "Detailed chronicle of the billionaire's chaotic acquisition and transformation of Twitter. This archive documents the policy changes, controversial decisions, and tumultuous workplace drama that redefined the platform.",
        "This acquisition represented an unprecedented moment when a single billionaire's personal vision dramatically altered a global communication platform, raising fundamental questions about power, speech, and private control of digital public squares.",
        "Business",
        "Complete policy change documentation",
    ));

    store.create_item(item(
        jax,
        "Claude/Grok Chat Logs",
        "Archive of conversations with early commercial AI assistants that transformed productivity. This collection captures both impressive capabilities and amusing hallucinations that characterized the dawn of consumer AI.",
        "These early AI interactions represent humanity's first widespread experience with artificial general intelligence, capturing both the promise and limitations of systems that would fundamentally transform how people worked and created.",
        "Technology",
        "Complete conversation dataset",
    ));

    store.create_item(item(
        jax,
        "LeetCode Job Market Crisis",
        "Documentation of the tech industry's obsession with algorithmic interviews amid contracting opportunities. This archive captures the anxiety, competition, and criticism surrounding tech hiring practices during market uncertainty.",
        "This period revealed fundamental tensions in tech hiring, as companies increasingly relied on abstract puzzle-solving to evaluate candidates while the industry simultaneously faced its most significant contraction in decades.",
        "Career",
        "Industry-wide hiring data analysis",
    ));

    store.create_item(item(
        jax,
        "Viral Tech Tweets Collection",
        "Curated archive of the most influential tech industry posts that shaped digital discourse. From founder pronouncements to engineer whistleblowing, this collection captures the conversations that drove Silicon Valley.",
        "These viral moments transcended tech to influence mainstream culture, revealing how the thoughts of industry insiders increasingly shaped broader social attitudes toward technology and its role in society.",
        "Social Media",
        "Impact analysis with engagement metrics",
    ));

    store.create_item(item(
        jax,
        "Why I'm Leaving FAANG at 27",
        "The HackerNews post that launched a thousand career changes. This influential resignation letter and its thousands of comments capture the disillusionment that swept through tech's most prestigious companies.",
        "This viral post crystallized growing dissatisfaction with Big Tech's working conditions and values, sparking broader conversations about work-life balance, compensation, and purpose in the technology industry.",
        "Career",
        "Complete comment thread archive",
    ));

    store.create_item(item(
        jax,
        "AI-Generated Portrait Collection",
        "Gallery of eerily perfect AI-generated professional headshots that flooded LinkedIn. This archive captures both the impressive technical achievements and the unsettling homogeneity of algorithmically generated professional identities.",
        "This trend marked a turning point when AI-generated imagery became indistinguishable from photography, forcing a fundamental reconsideration of visual authenticity in professional contexts.",
        "Technology",
        "Technical analysis of generation patterns",
    ));

    store.create_item(item(
        jax,
        "Uber for Therapists Pitch Deck",
        "Complete startup pitch for the controversial on-demand mental health service. This comprehensive business proposal includes market analysis, financial projections, and the heated investor discussions that followed.",
        "This pitch exemplified the tech industry's tendency to apply platform economics to increasingly intimate human services, raising important questions about care commodification and professional ethics.",
        "Business",
        "Complete investor Q&A transcript",
    ));

    store.create_item(item(
        jax,
        "4:30 AM Routine Reel",
        "Viral video detailing a tech entrepreneur's extreme morning productivity ritual. This meticulous documentation of cold plunges, meditation, nootropics, and time-blocking captured the industry's optimization obsession.",
        "This video epitomized Silicon Valley's distinctive approach to productivity and wellness, where biological functions were increasingly viewed through the lens of optimization and performance enhancement.",
        "Lifestyle",
        "Complete product list with usage instructions",
    ));

    store.create_item(item(
        jax,
        "Non-Working GPT Todo App",
        "Source code for the AI-generated task management application that never quite worked. This extensively documented project captures both the promise and limitations of early generative AI for software development.",
        "This project represented the early frontier of AI-assisted programming, highlighting both the revolutionary potential and practical limitations of systems that could generate code but struggled with logical consistency.",
        "Code",
        "Complete development history with error analysis",
    ));
}

fn seed_luca_items(store: &impl Store, luca: CharacterId) {
    store.create_item(item(
        luca,
        "Social Justice Infographic Carousel",
        "Collection of the visually distinct slideshows that transformed complex social issues into shareable content. This archive captures both the design evolution and the discourse around information aesthetics and activism.",
        "These carousels represented a fundamental shift in how social justice information spread, creating a distinctive visual language for activism that prioritized accessibility and shareability.",
        "Activism",
        "Design evolution analysis with engagement metrics",
    ));

    store.create_item(item(
        luca,
        "Pinterest Aesthetic Collections",
        "Comprehensive archive of the visual mood boards that defined distinct internet aesthetics. From cottagecore to Y2K revival, this collection documents how digital curation shaped personal style and identity.",
        "Pinterest boards transformed how people conceptualized and communicated personal style, creating a visual vocabulary for aesthetics that influenced fashion, interior design, and personal expression.",
        "Design",
        "Trend analysis with influence mapping",
    ));

    store.create_item(item(
        luca,
        "Aesthetic Communication Guide",
        "Instructional archive demonstrating how visual aesthetics replaced traditional vocabulary. This guide documents the evolution of communication where 'dark academia' or 'coastal grandmother' conveyed more than paragraphs of description.",
        "This shift represented a fundamental change in how people conceptualized and communicated identity, replacing descriptive language with visual shorthand that conveyed complex meaning through aesthetic association.",
        "Communication",
        "Complete aesthetic vocabulary with visual examples",
    ));

    store.create_item(item(
        luca,
        "NYC Subway Chaos Archive",
        "Curated collection capturing the beautiful mayhem of New York City's underground transit system. From spontaneous Jazz performances to fashion shows unfolding between stations, this archive celebrates urban serendipity.",
        "The subway represented one of the last truly democratic shared spaces in an increasingly stratified city, where authentic human interaction and cultural exchange happened across social boundaries.",
        "Urban Life",
        "Interactive map with documented events",
    ));

    store.create_item(item(
        luca,
        "Thrifted Jacket Styling Series",
        "Viral TikTok collection showing a single secondhand jacket transformed through 50 different styling approaches. This visual guide demonstrates creative reinterpretation through accessories, layering, and context changes.",
        "This series captured the generational shift toward sustainable fashion and individual expression, rejecting fast fashion consumerism in favor of creative reuse and personal style innovation.",
        "Fashion",
        "Complete technique guide with accessory details",
    ));

    store.create_item(item(
        luca,
        "Fashion Week Backstage Access",
        "Unauthorized footage from behind the scenes at exclusive runway shows. This rare documentation captures the unfiltered reality behind the curated perfection of high fashion presentations.",
        "This footage represented the democratization of fashion's most exclusive spaces, bringing transparency to an industry traditionally defined by carefully controlled access and presentation.",
        "Fashion",
        "Designer interviews with candid commentary",
    ));

    store.create_item(item(
        luca,
        "Rat-Chewed Designer Piece",
        "Preserved remains of a luxury garment damaged by New York's infamous rodent population. This artifact became a viral symbol of the city's gritty reality colliding with aspirational fashion culture.",
        "This damaged garment became an ironic status symbol, representing the authentic New York experience that balanced glamour with urban grit in a way that couldn't be replicated in manufactured fashion narratives.",
        "Fashion",
        "Exhibition history with critical reviews",
    ));

    store.create_item(item(
        luca,
        "Bodega Bacon Egg & Cheese",
        "Comprehensive documentation of the quintessential New York breakfast sandwich in its natural habitat. This archive includes photography, interviews with iconic bodega owners, and cultural analysis of this urban staple.",
        "The bodega BEC transcended its status as mere food to become a cultural institution and class equalizer in a divided city, representing affordable quality and neighborhhood connection amid rapid gentrification.",
        "Food",
        "Map of critically acclaimed locations with recipes",
    ));

    store.create_item(item(
        luca,
        "Blurry Mirror Outfit Documentation",
        "Collection of intentionally low-resolution outfit photos that defined a generation's approach to fashion documentation. This archive traces the evolution from high-production fashion photography to authentic, imperfect self-representation.",
        "This aesthetic rejection of technical perfection represented a cultural shift toward authenticity over polish, where the deliberate embrace of imperfection became a statement against curated inauthenticity.",
        "Photography",
        "Technical analysis of intentional degradation techniques",
    ));

    store.create_item(item(
        luca,
        "Rick Owens DM Request",
        "Screenshot collection documenting the phenomenon of fashion students boldly messaging industry icons. This archive captures both desperate pleas and surprising successes in the pursuit of design mentorship and borrowed garments.",
        "These direct messages represented how social media collapsed traditional industry hierarchies, creating unprecedented access to fashion's most exclusive figures through digital persistence and creativity.",
        "Social Media",
        "Success strategy analysis with response statistics",
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn seeded_store_has_three_characters_in_order() {
        let store = MemoryStore::seeded();

        let names: Vec<_> = store
            .list_characters()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Bria Reign", "Jax", "Luca Saint"]);
    }

    #[test]
    fn seeded_store_has_ten_items_per_character() {
        let store = MemoryStore::seeded();

        assert_eq!(store.list_items().len(), 30);
        for character in store.list_characters() {
            assert_eq!(store.list_items_by_character(character.id).len(), 10);
        }
    }

    #[test]
    fn seed_border_colors_match_dataset() {
        let store = MemoryStore::seeded();

        let colors: Vec<_> = store
            .list_characters()
            .into_iter()
            .map(|c| c.border_color)
            .collect();
        assert_eq!(colors, vec!["primary", "secondary", "accent"]);
    }

    #[test]
    fn every_seed_item_has_a_non_empty_resource() {
        let store = MemoryStore::seeded();

        for item in store.list_items() {
            assert!(!item.resource.is_empty(), "item {} has no resource", item.id);
            // The dataset supplies every resource explicitly; the default
            // never fires during seeding.
            assert_ne!(item.resource, capsule_core::DEFAULT_RESOURCE);
        }
    }

    #[test]
    fn seeding_is_deterministic() {
        let first = MemoryStore::seeded();
        let second = MemoryStore::seeded();

        assert_eq!(first.list_characters(), second.list_characters());
        assert_eq!(first.list_items(), second.list_items());
    }

    #[test]
    fn first_character_items_start_the_item_id_sequence() {
        let store = MemoryStore::seeded();

        let bria = &store.list_characters()[0];
        let items = store.list_items_by_character(bria.id);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(items[0].title, "BBL Drake");
        assert_eq!(items[9].title, "We Did It Joe - Kamala Harris Edit");
    }
}
