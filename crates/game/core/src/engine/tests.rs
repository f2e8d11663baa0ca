use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::*;
use crate::env::{PcgRng, RngOracle};

const POTION: ItemId = ItemId(1);
const EMPTY_BOTTLE: ItemId = ItemId(2);
const SUGAR: ItemId = ItemId(3);
const SCRAP: ItemId = ItemId(4);

struct TestCatalog(Vec<Option<CatalogItem>>);

impl TestCatalog {
    /// Slot 1 is the item under test; slots 2..=4 are materials.
    fn with_source(note: &str) -> Self {
        Self(vec![
            None,
            Some(CatalogItem::new(POTION, "Potion", 176, note)),
            Some(CatalogItem::new(EMPTY_BOTTLE, "Empty Bottle", 200, "<DeconMaterial:EmptyBottle>")),
            Some(CatalogItem::new(SUGAR, "Sugar", 201, "<DeconMaterial:Sugar>")),
            Some(CatalogItem::new(SCRAP, "Scrap", 202, "<DeconMaterial:Scrap>")),
        ])
    }
}

impl ItemCatalog for TestCatalog {
    fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.0.get(id.0 as usize)?.as_ref()
    }

    fn len(&self) -> u32 {
        self.0.len() as u32
    }
}

#[derive(Default)]
struct TestParty(HashMap<ItemId, u32>);

impl TestParty {
    fn holding(item: ItemId, quantity: u32) -> Self {
        Self(HashMap::from([(item, quantity)]))
    }
}

impl PartyInventory for TestParty {
    fn quantity(&self, item: ItemId) -> u32 {
        self.0.get(&item).copied().unwrap_or(0)
    }

    fn add_item(&mut self, item: ItemId, quantity: u32) {
        *self.0.entry(item).or_insert(0) += quantity;
    }

    fn remove_item(&mut self, item: ItemId, quantity: u32) {
        let held = self.0.entry(item).or_insert(0);
        *held = held.saturating_sub(quantity);
    }
}

/// Returns queued draws in order, then `fallback`.
struct ScriptedRng {
    draws: Mutex<VecDeque<f64>>,
    fallback: f64,
}

impl ScriptedRng {
    fn new(draws: &[f64], fallback: f64) -> Self {
        Self {
            draws: Mutex::new(draws.iter().copied().collect()),
            fallback,
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        (self.unit(seed) * 4_294_967_296.0) as u32
    }

    fn unit(&self, _seed: u64) -> f64 {
        self.draws
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

fn run(
    catalog: &TestCatalog,
    rng: &dyn RngOracle,
    party: &mut TestParty,
    messages: &mut Vec<String>,
) -> ResolveOutcome {
    let registry = MaterialRegistry::build(catalog).unwrap();
    let config = DeconConfig::default().with_templates("- %2", "+ %2 x%3");
    let engine = DeconstructionEngine::new(&registry, catalog, &config);
    let mut rolls = RollStream::new(rng, 1, 0, POTION.0);
    engine.resolve(POTION, &mut rolls, party, messages)
}

#[test]
fn potion_end_to_end() {
    let catalog = TestCatalog::with_source(
        "<DeconResult EmptyBottle:100>\n<DeconForced Sugar:2>\n<DeconMaxRepeats:0>\n<DeconChanceRepeat:0>",
    );
    let rng = ScriptedRng::new(&[0.5, 0.5], 0.5);
    let mut party = TestParty::holding(POTION, 1);
    let mut messages = Vec::new();

    let outcome = run(&catalog, &rng, &mut party, &mut messages);
    let resolution = outcome.resolution().unwrap();

    assert_eq!(party.quantity(POTION), 0);
    assert_eq!(party.quantity(EMPTY_BOTTLE), 1);
    assert_eq!(party.quantity(SUGAR), 2);
    assert_eq!(resolution.weighted_draws, 1);
    assert_eq!(resolution.quantity(EMPTY_BOTTLE), 1);
    assert_eq!(resolution.quantity(SUGAR), 2);
    assert_eq!(messages, ["- Potion", "+ Empty Bottle x1", "+ Sugar x2"]);
    assert_eq!(resolution.narration, messages);
}

#[test]
fn item_not_held_is_a_no_op() {
    let catalog = TestCatalog::with_source("<DeconResult EmptyBottle:100>\n<DeconForced Sugar:2>");
    let rng = PcgRng;
    let mut party = TestParty::holding(SUGAR, 5);
    let mut messages = Vec::new();

    let outcome = run(&catalog, &rng, &mut party, &mut messages);

    assert_eq!(outcome, ResolveOutcome::NotHeld);
    assert!(messages.is_empty());
    assert_eq!(party.0, HashMap::from([(SUGAR, 5)]));
}

#[test]
fn unknown_and_reserved_ids_are_not_held() {
    let catalog = TestCatalog::with_source("<DeconForced Sugar:2>");
    let registry = MaterialRegistry::build(&catalog).unwrap();
    let config = DeconConfig::default();
    let engine = DeconstructionEngine::new(&registry, &catalog, &config);
    let rng = PcgRng;
    let mut party = TestParty::holding(ItemId(0), 1);
    party.add_item(ItemId(42), 1);
    let mut messages = Vec::new();

    for id in [ItemId(0), ItemId(42)] {
        let mut rolls = RollStream::new(&rng, 1, 0, id.0);
        let outcome = engine.resolve(id, &mut rolls, &mut party, &mut messages);
        assert_eq!(outcome, ResolveOutcome::NotHeld);
    }
    assert!(messages.is_empty());
}

#[test]
fn max_repeats_allows_two_extra_draws() {
    let catalog = TestCatalog::with_source(
        "<DeconResult EmptyBottle:1>\n<DeconMaxRepeats:2>\n<DeconChanceRepeat:1>",
    );
    let rng = ScriptedRng::new(&[], 0.5);
    let mut party = TestParty::holding(POTION, 1);
    let mut messages = Vec::new();

    let outcome = run(&catalog, &rng, &mut party, &mut messages);
    let resolution = outcome.resolution().unwrap();

    // DeconMaxRepeats:2 -> max_repeats 3 -> loop bound 4.
    assert_eq!(resolution.weighted_draws, 4);
    assert_eq!(party.quantity(EMPTY_BOTTLE), 4);
    assert_eq!(messages, ["- Potion", "+ Empty Bottle x4"]);
}

#[test]
fn missing_repeat_tags_default_to_two_iterations_at_most() {
    let catalog = TestCatalog::with_source("<DeconResult EmptyBottle:1>\n<DeconChanceRepeat:1>");
    let rng = ScriptedRng::new(&[], 0.0);
    let mut party = TestParty::holding(POTION, 1);

    let outcome = run(&catalog, &rng, &mut party, &mut Vec::new());

    assert_eq!(outcome.resolution().unwrap().weighted_draws, 2);
    assert_eq!(party.quantity(EMPTY_BOTTLE), 2);
}

#[test]
fn none_sentinel_never_drops() {
    let catalog = TestCatalog::with_source("<DeconResult NONE:100>\n<DeconMaxRepeats:3>");
    let registry = MaterialRegistry::build(&catalog).unwrap();
    let config = DeconConfig::default();
    let engine = DeconstructionEngine::new(&registry, &catalog, &config);
    let rng = PcgRng;

    for nonce in 0..200 {
        let mut party = TestParty::holding(POTION, 1);
        let mut messages = Vec::new();
        let mut rolls = RollStream::new(&rng, 77, nonce, POTION.0);

        let outcome = engine.resolve(POTION, &mut rolls, &mut party, &mut messages);
        let resolution = outcome.resolution().unwrap();

        assert!(resolution.is_empty());
        // Empty draws never roll the continuation chance, so the loop runs out.
        assert_eq!(resolution.weighted_draws, 5);
        assert_eq!(messages.len(), 1);
    }
}

#[test]
fn empty_draw_does_not_stop_the_loop() {
    let catalog = TestCatalog::with_source(
        "<DeconResult NONE:50>\n<DeconResult EmptyBottle:50>\n<DeconMaxRepeats:0>\n<DeconChanceRepeat:0>",
    );
    // none, bottle, stop
    let rng = ScriptedRng::new(&[0.1, 0.9, 0.5], 0.5);
    let mut party = TestParty::holding(POTION, 1);

    let outcome = run(&catalog, &rng, &mut party, &mut Vec::new());
    let resolution = outcome.resolution().unwrap();

    assert_eq!(resolution.weighted_draws, 2);
    assert_eq!(party.quantity(EMPTY_BOTTLE), 1);
}

#[test]
fn weighted_lines_follow_catalog_order_and_merge_with_forced() {
    let catalog = TestCatalog::with_source(
        "<DeconResult Scrap:1>\n<DeconResult Sugar:1>\n<DeconForced Scrap:3>\n<DeconMaxRepeats:1>\n<DeconChanceRepeat:1>",
    );
    // scrap, continue, sugar, continue, scrap, continue
    let rng = ScriptedRng::new(&[0.2, 0.0, 0.8, 0.0, 0.2, 0.0], 0.0);
    let mut party = TestParty::holding(POTION, 2);
    let mut messages = Vec::new();

    let outcome = run(&catalog, &rng, &mut party, &mut messages);
    let resolution = outcome.resolution().unwrap();

    assert_eq!(resolution.weighted_draws, 3);
    assert_eq!(party.quantity(POTION), 1);
    assert_eq!(
        messages,
        ["- Potion", "+ Sugar x1", "+ Scrap x2", "+ Scrap x3"]
    );
    assert_eq!(resolution.quantity(SCRAP), 5);
    assert_eq!(resolution.quantity(SUGAR), 1);
    assert_eq!(party.quantity(SCRAP), 5);
}

#[test]
fn zero_and_unresolved_forced_drops_are_skipped() {
    let catalog = TestCatalog::with_source(
        "<DeconForced Sugar:0 to 1>\n<DeconForced Glitter:4>\n<DeconForced Scrap:0>\n<DeconForced EmptyBottle:1 to 3>",
    );
    let rng = ScriptedRng::new(&[0.3, 0.6], 0.0);
    let mut party = TestParty::holding(POTION, 1);
    let mut messages = Vec::new();

    let outcome = run(&catalog, &rng, &mut party, &mut messages);
    let resolution = outcome.resolution().unwrap();

    assert_eq!(resolution.weighted_draws, 0);
    assert_eq!(messages, ["- Potion", "+ Empty Bottle x2"]);
    assert_eq!(resolution.drops, BTreeMap::from([(EMPTY_BOTTLE, 2)]));
}

#[test]
fn malformed_weights_do_not_abort() {
    let catalog = TestCatalog::with_source(
        "<DeconResult Sugar:lots>\n<DeconResult EmptyBottle:1>\n<DeconMaxRepeats:many>",
    );
    let rng = ScriptedRng::new(&[0.0, 0.5], 0.5);
    let mut party = TestParty::holding(POTION, 1);

    let outcome = run(&catalog, &rng, &mut party, &mut Vec::new());
    let resolution = outcome.resolution().unwrap();

    assert_eq!(resolution.drops, BTreeMap::from([(EMPTY_BOTTLE, 1)]));
    assert_eq!(party.quantity(POTION), 0);
}

#[test]
fn repeat_policy_parsing() {
    let policy = RepeatPolicy::from_metadata(&Metadata::parse("<DeconMaxRepeats:3><DeconChanceRepeat:0.5>"));
    assert_eq!(policy.max_repeats, 4.0);
    assert_eq!(policy.chance, 0.5);
    assert_eq!(policy.iteration_limit(), 5);

    let policy = RepeatPolicy::from_metadata(&Metadata::parse("<DeconMaxRepeats:-1><DeconChanceRepeat:x>"));
    assert_eq!(policy.max_repeats, 1.0);
    assert_eq!(policy.chance, 0.0);
    assert_eq!(policy.iteration_limit(), 2);

    let policy = RepeatPolicy::from_metadata(&Metadata::parse("<DeconMaxRepeats:-4>"));
    assert_eq!(policy.iteration_limit(), 0);
}

#[test]
fn non_finite_repeat_tags_fall_back_to_defaults() {
    for note in [
        "<DeconMaxRepeats:inf><DeconChanceRepeat:inf>",
        "<DeconMaxRepeats:Infinity><DeconChanceRepeat:NaN>",
        "<DeconMaxRepeats:1e999><DeconChanceRepeat:-inf>",
    ] {
        let policy = RepeatPolicy::from_metadata(&Metadata::parse(note));
        assert_eq!(policy.max_repeats, 1.0, "{note}");
        assert_eq!(policy.chance, 0.0, "{note}");
        assert_eq!(policy.iteration_limit(), 2, "{note}");
    }
}

#[test]
fn huge_repeat_counts_are_capped() {
    let policy = RepeatPolicy::from_metadata(&Metadata::parse("<DeconMaxRepeats:1e12>"));
    assert_eq!(policy.iteration_limit(), RepeatPolicy::MAX_ITERATIONS);

    let catalog = TestCatalog::with_source(
        "<DeconResult EmptyBottle:1>\n<DeconMaxRepeats:inf>\n<DeconChanceRepeat:1>",
    );
    let rng = ScriptedRng::new(&[], 0.5);
    let mut party = TestParty::holding(POTION, 1);

    let outcome = run(&catalog, &rng, &mut party, &mut Vec::new());

    assert_eq!(outcome.resolution().unwrap().weighted_draws, 2);
    assert_eq!(party.quantity(EMPTY_BOTTLE), 2);

    let catalog = TestCatalog::with_source(
        "<DeconResult EmptyBottle:1>\n<DeconMaxRepeats:1e12>\n<DeconChanceRepeat:1>",
    );
    let mut party = TestParty::holding(POTION, 1);

    let outcome = run(&catalog, &rng, &mut party, &mut Vec::new());

    assert_eq!(
        outcome.resolution().unwrap().weighted_draws,
        RepeatPolicy::MAX_ITERATIONS
    );
}
