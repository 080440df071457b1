use crate::{Ball, Config, Events, GameRng, MatchState, Score, Side, VictoryEffect};
use hecs::World;

/// Check if ball left the court (scoring)
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    victory: &mut Option<VictoryEffect>,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // The side whose goal line the ball crossed concedes the point
        let conceded = if ball.pos.x < 0.0 {
            Side::Left
        } else if ball.pos.x > config.court_width {
            Side::Right
        } else {
            continue;
        };
        let scorer = conceded.opponent();

        score.increment(scorer);
        events.mark_scored(scorer);
        log::debug!(
            "Player {} scored ({} - {})",
            scorer.player_number(),
            score.left,
            score.right
        );

        check_winner(config, state, score, events, rng, victory);
        ball.reset(config, rng);
    }
}

/// End the match once either side reaches the winning score
pub fn check_winner(
    config: &Config,
    state: &mut MatchState,
    score: &Score,
    events: &mut Events,
    rng: &mut GameRng,
    victory: &mut Option<VictoryEffect>,
) {
    if state.game_over {
        return;
    }

    if let Some(winner) = score.has_winner(config.win_score) {
        state.game_over = true;
        state.winner = Some(winner);
        events.match_won = true;
        *victory = Some(VictoryEffect::new(config, rng));
        log::info!(
            "Player {} wins {} - {}",
            winner.player_number(),
            score.left,
            score.right
        );
    }
}
