use ballforge::arsenal::select;
use ballforge::ball::{Ball, Core, Coverstock};
use ballforge::config::{SessionParams, Thresholds};
use ballforge::context::Context;
use ballforge::lanes::{get_all_surfaces, LaneSurface};
use ballforge::scorer::{Role, Scorer};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_coverstock() -> impl Strategy<Value = Coverstock> {
    prop::sample::select(Coverstock::iter().collect::<Vec<_>>())
}

fn arb_surface() -> impl Strategy<Value = LaneSurface> {
    prop::sample::select(get_all_surfaces())
}

fn arb_core() -> impl Strategy<Value = Core> {
    prop_oneof![
        Just(Core::Symmetric),
        (0.0..0.030f64).prop_map(|int_diff| Core::Asymmetric { int_diff }),
    ]
}

// Realistic bowler and lane ranges
prop_compose! {
    fn arb_context()(
        surface in arb_surface(),
        oil_length in 30.0..50.0f64,
        oil_volume in 15.0..30.0f64,
        speed in 10.0..22.0f64,
        rev_rate in 150.0..600.0f64,
        pin_to_pap in 2.0..6.0f64,
    ) -> Context {
        let params = SessionParams {
            surface,
            oil_length,
            oil_volume,
            speed,
            rev_rate,
            pin_to_pap,
        };
        Context::from_params(&params, &Thresholds::default())
    }
}

prop_compose! {
    fn arb_ball()(
        rg in 2.40..2.65f64,
        diff in 0.01..0.08f64,
        core in arb_core(),
        cover in arb_coverstock(),
    ) -> Ball {
        Ball::new("prop", rg, diff).with_core(core).with_coverstock(cover)
    }
}

fn arb_inventory(min: usize, max: usize) -> impl Strategy<Value = Vec<Ball>> {
    proptest::collection::vec(arb_ball(), min..max).prop_map(|balls| {
        balls
            .into_iter()
            .enumerate()
            .map(|(i, mut b)| {
                b.name = format!("Ball {}", i);
                b
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn fresh_rewards_diff(ball in arb_ball(), ctx in arb_context(), bump in 0.001..0.02f64) {
        let scorer = Scorer::default();
        let mut stronger = ball.clone();
        stronger.diff += bump;
        prop_assert!(
            scorer.score(&stronger, &ctx, Role::Fresh) > scorer.score(&ball, &ctx, Role::Fresh)
        );
    }

    #[test]
    fn fresh_rewards_low_rg(ball in arb_ball(), ctx in arb_context(), bump in 0.001..0.05f64) {
        let scorer = Scorer::default();
        let mut lower = ball.clone();
        lower.rg -= bump;
        prop_assert!(
            scorer.score(&lower, &ctx, Role::Fresh) > scorer.score(&ball, &ctx, Role::Fresh)
        );
    }

    #[test]
    fn burned_rewards_high_rg(ball in arb_ball(), ctx in arb_context(), bump in 0.001..0.05f64) {
        let scorer = Scorer::default();
        let mut higher = ball.clone();
        higher.rg += bump;
        prop_assert!(
            scorer.score(&higher, &ctx, Role::Burned) > scorer.score(&ball, &ctx, Role::Burned)
        );
    }

    #[test]
    fn burned_rewards_low_diff(ball in arb_ball(), ctx in arb_context(), bump in 0.001..0.02f64) {
        let scorer = Scorer::default();
        let mut weaker = ball.clone();
        weaker.diff -= bump;
        prop_assert!(
            scorer.score(&weaker, &ctx, Role::Burned) > scorer.score(&ball, &ctx, Role::Burned)
        );
    }

    #[test]
    fn scores_are_finite(ball in arb_ball(), ctx in arb_context()) {
        let scorer = Scorer::default();
        for role in Role::iter() {
            prop_assert!(scorer.score(&ball, &ctx, role).is_finite());
        }
    }

    #[test]
    fn three_or_more_balls_give_distinct_picks(
        balls in arb_inventory(3, 25),
        ctx in arb_context(),
    ) {
        let scores = Scorer::default().score_inventory(&balls, &ctx);
        let arsenal = select(&scores).unwrap();

        prop_assert_eq!(arsenal.picks.len(), 3);
        let picked: Vec<usize> = arsenal.picks.iter().map(|p| p.ball).collect();
        prop_assert_ne!(picked[0], picked[1]);
        prop_assert_ne!(picked[0], picked[2]);
        prop_assert_ne!(picked[1], picked[2]);
        prop_assert!(arsenal.picks.iter().all(|p| !p.repeated));
        prop_assert_eq!(arsenal.also_considered.len(), balls.len() - 3);
    }

    #[test]
    fn each_pick_is_best_of_its_pool(
        balls in arb_inventory(1, 25),
        ctx in arb_context(),
    ) {
        let scores = Scorer::default().score_inventory(&balls, &ctx);
        let arsenal = select(&scores).unwrap();

        let mut taken: Vec<usize> = Vec::new();
        for pick in &arsenal.picks {
            let pool: Vec<usize> = (0..balls.len()).filter(|i| !taken.contains(i)).collect();
            let pool = if pool.is_empty() { (0..balls.len()).collect() } else { pool };
            for &i in &pool {
                prop_assert!(scores[i].get(pick.role) <= pick.score);
            }
            if !taken.contains(&pick.ball) {
                taken.push(pick.ball);
            }
        }
    }

    #[test]
    fn selection_is_idempotent(balls in arb_inventory(1, 15), ctx in arb_context()) {
        let scorer = Scorer::default();
        let first = select(&scorer.score_inventory(&balls, &ctx)).unwrap();
        let second = select(&scorer.score_inventory(&balls, &ctx)).unwrap();
        prop_assert_eq!(first, second);
    }
}
