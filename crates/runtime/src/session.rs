//! Deconstruction session: catalog, registry, party and randomness in one place.
//!
//! A [`Session`] plays the role of a running game. Its material registry is
//! built at most once, the first time [`Session::initialize`] runs (or lazily
//! on the first request), and stays untouched for the rest of the session.
use std::sync::Arc;

use tracing::{debug, error, info};

use decon_content::{ContentFactory, StartingParty};
use decon_core::{
    DeconConfig, DeconError, DeconstructionEngine, ItemId, MaterialRegistry, PcgRng,
    ResolveOutcome, RngOracle, RollStream,
};

use crate::error::Result;
use crate::oracle::CatalogOracleImpl;
use crate::state::{MessageLog, PartyState, Variables};

pub struct Session {
    catalog: Arc<CatalogOracleImpl>,
    config: DeconConfig,
    rng: Arc<dyn RngOracle>,
    seed: u64,
    nonce: u64,
    registry: Option<MaterialRegistry>,
    party: PartyState,
    messages: MessageLog,
    variables: Variables,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Builds the material registry unless it is already built.
    ///
    /// # Errors
    ///
    /// A duplicate material declaration is fatal and leaves the session
    /// uninitialized.
    pub fn initialize(&mut self) -> Result<&MaterialRegistry> {
        let registry = match self.registry.take() {
            Some(registry) => registry,
            None => {
                let registry = MaterialRegistry::build(self.catalog.as_ref()).inspect_err(|err| {
                    error!(
                        code = err.error_code(),
                        severity = err.severity().as_str(),
                        "material registry failed: {}",
                        err
                    );
                })?;
                info!("Deconstructor is initialized with {} materials", registry.len());
                registry
            }
        };

        Ok(self.registry.insert(registry))
    }

    pub fn is_ready(&self) -> bool {
        self.registry.is_some()
    }

    pub fn registry(&self) -> Option<&MaterialRegistry> {
        self.registry.as_ref()
    }

    /// Deconstructs one unit of `item` from the party.
    ///
    /// Initializes the session first if needed. Each call consumes one nonce,
    /// so results are reproducible from the session seed and call order.
    pub fn deconstruct(&mut self, item: ItemId) -> Result<ResolveOutcome> {
        self.initialize()?;

        let nonce = self.nonce;
        self.nonce += 1;

        let Some(registry) = self.registry.as_ref() else {
            return Ok(ResolveOutcome::NotHeld);
        };
        let engine = DeconstructionEngine::new(registry, self.catalog.as_ref(), &self.config);
        let mut rolls = RollStream::new(self.rng.as_ref(), self.seed, nonce, item.0);

        let outcome = engine.resolve(item, &mut rolls, &mut self.party, &mut self.messages);
        debug!("request {} for item {}: resolved={}", nonce, item, outcome.is_resolved());

        Ok(outcome)
    }

    pub fn catalog(&self) -> &CatalogOracleImpl {
        &self.catalog
    }

    pub fn config(&self) -> &DeconConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn party(&self) -> &PartyState {
        &self.party
    }

    pub fn party_mut(&mut self) -> &mut PartyState {
        &mut self.party
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    catalog: CatalogOracleImpl,
    config: DeconConfig,
    rng: Arc<dyn RngOracle>,
    seed: Option<u64>,
    holdings: Vec<(ItemId, u32)>,
    variables: Variables,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            catalog: CatalogOracleImpl::new(),
            config: DeconConfig::default(),
            rng: Arc::new(PcgRng),
            seed: None,
            holdings: Vec::new(),
            variables: Variables::new(),
        }
    }

    /// Starts a builder from a content data directory.
    ///
    /// Loads `items.ron`, plus `config.toml` and `party.ron` when present.
    pub fn from_content(factory: &ContentFactory) -> anyhow::Result<Self> {
        let items = factory.load_items()?;
        let config = factory.load_config()?;
        let party = factory.load_party()?;

        debug!(
            "loaded {} items from {}",
            items.len(),
            factory.data_dir().display()
        );

        Ok(Self::new()
            .catalog(CatalogOracleImpl::from_items(items))
            .config(config)
            .starting_party(party))
    }

    pub fn catalog(mut self, catalog: CatalogOracleImpl) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(mut self, config: DeconConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the random source (defaults to [`PcgRng`]).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Arc::new(rng);
        self
    }

    /// Fix the session seed. Without one, a random seed is chosen at build time.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn holding(mut self, item: ItemId, quantity: u32) -> Self {
        self.holdings.push((item, quantity));
        self
    }

    pub fn variable(mut self, id: u32, value: i64) -> Self {
        self.variables.set(id, value);
        self
    }

    pub fn starting_party(mut self, party: StartingParty) -> Self {
        self.holdings.extend(party.items);
        for (id, value) in party.variables {
            self.variables.set(id, value);
        }
        self
    }

    pub fn build(self) -> Session {
        let seed = self.seed.unwrap_or_else(rand::random);
        debug!("session seed: {}", seed);

        let mut party = PartyState::new(self.config.max_item_stack);
        for (item, quantity) in self.holdings {
            party.set(item, quantity);
        }

        Session {
            catalog: Arc::new(self.catalog),
            config: self.config,
            rng: self.rng,
            seed,
            nonce: 0,
            registry: None,
            party,
            messages: MessageLog::new(),
            variables: self.variables,
        }
    }
}
