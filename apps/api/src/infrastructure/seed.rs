//! Startup seed data
//!
//! Two Eredivisie clubs with five players each. Ids are UUID v5 values derived
//! from the names, so seeding again after a restart finds the same rows and
//! leaves them (and any transfers made since) alone.

use uuid::Uuid;

use crate::domain::errors::{FootballError, FootballResult};
use crate::domain::player::{Player, PlayerProfile};
use crate::domain::repositories::{MarketRepository, PlayerRepository, TeamRepository};
use crate::domain::team::{Team, TeamProfile};

const SEED_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a8e_43b7_4d0a_9c55_7e21_b3f0_d4a9);

struct SeedClub {
    name: &'static str,
    country: &'static str,
    league: &'static str,
    players: &'static [(&'static str, u32, u32, &'static str)],
}

const CLUBS: &[SeedClub] = &[
    SeedClub {
        name: "AZ Alkmaar",
        country: "Netherlands",
        league: "Eredivisie",
        players: &[
            ("Rome Jayden Owusu-Oduro", 190, 20, "Netherlands"),
            ("Troy Parrot", 185, 20, "Ireland"),
            ("Bruno Martins Indi", 185, 32, "Netherlands"),
            ("Ruben van Bommel", 192, 20, "Netherlands"),
            ("Ibrahim Sadiq", 167, 37, "Ghana"),
        ],
    },
    SeedClub {
        name: "Ajax",
        country: "Netherlands",
        league: "Eredivisie",
        players: &[
            ("Remko Pasveer", 188, 41, "Netherlands"),
            ("Mika Godts", 176, 19, "Belgium"),
            ("Brian Brobbey", 182, 22, "Netherlands"),
            ("Bertrand Traoré", 181, 29, "Burkina Faso"),
            ("Kenneth Taylor", 182, 22, "Netherlands"),
        ],
    },
];

/// Deterministic id for a seeded entity name
pub fn seed_id(name: &str) -> String {
    Uuid::new_v5(&SEED_NAMESPACE, name.as_bytes())
        .simple()
        .to_string()
}

/// Seeds clubs and players, signing each player through the market
///
/// Entities that already exist are kept as they are; a seeded player that is
/// already on some team is not signed again.
pub async fn seed_database(
    players: &dyn PlayerRepository,
    teams: &dyn TeamRepository,
    market: &dyn MarketRepository,
) -> FootballResult<()> {
    let mut created = 0usize;

    for club in CLUBS {
        let team = match teams.get(&seed_id(club.name)).await {
            Ok(team) => team,
            Err(FootballError::NotFound { .. }) => {
                let team = Team::new(
                    seed_id(club.name),
                    TeamProfile::new(club.name, club.country, club.league),
                );
                teams.insert(&team).await?;
                created += 1;
                team
            }
            Err(e) => return Err(e),
        };

        for (name, height_cm, age, nationality) in club.players {
            let player = match players.get(&seed_id(name)).await {
                Ok(player) => player,
                Err(FootballError::NotFound { .. }) => {
                    let player = Player::new(
                        seed_id(name),
                        PlayerProfile::new(*name, *height_cm, *age, *nationality),
                    );
                    players.insert(&player).await?;
                    created += 1;
                    player
                }
                Err(e) => return Err(e),
            };

            if player.team_id().is_none() {
                market.sign_player(&player, &team).await?;
            }
        }
    }

    tracing::info!(created, "Database seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_stable_and_distinct() {
        assert_eq!(seed_id("Ajax"), seed_id("Ajax"));
        assert_ne!(seed_id("Ajax"), seed_id("AZ Alkmaar"));
        assert_eq!(seed_id("Ajax").len(), 32);
    }

    #[test]
    fn seed_players_are_unique() {
        let mut names: Vec<&str> = CLUBS
            .iter()
            .flat_map(|c| c.players.iter().map(|p| p.0))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), total);
    }
}
