use tracing::{debug, instrument, warn};

use crate::fpl::{self, Transport};
use crate::model::TeamProfile;

/// Fetch a team's profile. Any failure yields an empty profile instead of an error.
///
/// Profile data only supplements the chip list, so losing it must not sink
/// the whole league. This also hides upstream outages behind "no chips".
#[instrument(skip(transport))]
pub(crate) async fn get_team_profile(transport: &dyn Transport, team_id: u32) -> TeamProfile {
    match fpl::get_json::<TeamProfile>(transport, &fpl::team_profile_path(team_id)).await {
        Ok(profile) => {
            debug!(team_id, chips = profile.chips.len(), "parsed team profile");
            profile
        }
        Err(e) => {
            warn!(team_id, error = %e, "team profile unavailable, using empty profile");
            TeamProfile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::testing::{self, FakeTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_profile_parses_chips() {
        let transport = FakeTransport::new().route(
            "/entry/3/",
            json!({
                "id": 3,
                "name": "Klopp Til You Drop",
                "player_first_name": "Sam",
                "player_last_name": "Reed",
                "leagues": { "classic": [{ "id": 5669, "name": "Office League" }], "h2h": [], "cup": null },
                "chips": [testing::chip("3xc", 6)],
            }),
        );

        let profile = get_team_profile(&transport, 3).await;

        assert_eq!(profile.name, "Klopp Til You Drop");
        assert_eq!(profile.leagues.classic[0].id, 5669);
        assert_eq!(profile.chips.len(), 1);
    }

    #[tokio::test]
    async fn test_profile_failure_degrades_to_default() {
        let transport = FakeTransport::new().unreachable("/entry/3/");

        let profile = get_team_profile(&transport, 3).await;

        assert!(profile.chips.is_empty());
        assert!(profile.leagues.classic.is_empty());
    }

    #[tokio::test]
    async fn test_profile_with_unexpected_shape_degrades() {
        let transport = FakeTransport::new().route("/entry/3/", json!({ "chips": "nope" }));
        let profile = get_team_profile(&transport, 3).await;
        assert!(profile.chips.is_empty());
    }
}
