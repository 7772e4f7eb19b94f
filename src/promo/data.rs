use super::{PromoCode, PromoRewards};

fn code(code: &str, name: &str, description: &str, coins: u64, gems: u64) -> PromoCode {
    PromoCode {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        rewards: PromoRewards {
            coins,
            gems,
            items: Vec::new(),
        },
    }
}

/// The shipped promo catalog.
pub fn default_promo_codes() -> Vec<PromoCode> {
    vec![
        code(
            "TNT",
            "Explosive Start",
            "Get a head start with bonus resources!",
            500,
            50,
        ),
        code(
            "HUGO2025",
            "New Year Bonus",
            "Celebrate the new year with extra rewards!",
            1000,
            100,
        ),
        code(
            "KNOWLEDGE",
            "Scholar's Gift",
            "For the true seekers of wisdom!",
            750,
            75,
        ),
        code(
            "ADVENTURE",
            "Explorer's Pack",
            "Everything an adventurer needs!",
            1500,
            150,
        ),
        code(
            "MYTHICAL",
            "Legendary Rewards",
            "The ultimate treasure trove!",
            2500,
            250,
        ),
    ]
}
