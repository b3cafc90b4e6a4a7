use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::{Result, WorkingDayError};
use crate::strategy::defaultholidaystrategy::DefaultHolidayStrategy;
use crate::strategy::holidaystrategy::HolidayStrategy;
use crate::strategy::portugal::portugal;
use crate::strategy::unitedstates::united_states;
use crate::strategy::weekdaypolicy::{DefaultWeekdayPolicy, WeekdayPolicy};

use super::workingdayculture::{WorkingDayCulture, WorkingDayCultureInfo};

/// Identifier of the neutral rule set: no holidays, Monday to Friday.
pub const DEFAULT_CULTURE: &str = "default";

/// Override lookup for holiday strategies; `None` defers to the tables.
pub type HolidayStrategyLocator = Arc<dyn Fn(&str) -> Option<Arc<dyn HolidayStrategy>> + Send + Sync>;

/// Override lookup for weekday policies; `None` defers to the tables.
pub type WeekdayPolicyLocator = Arc<dyn Fn(&str) -> Option<Arc<dyn WeekdayPolicy>> + Send + Sync>;

/// A built-in rule set, constructed once and shared by every registry.
struct BuiltinCulture {
    holiday_strategy: Arc<dyn HolidayStrategy>,
    weekday_policy: Arc<dyn WeekdayPolicy>
}

impl BuiltinCulture {
    fn new(holiday_strategy: impl HolidayStrategy + 'static) -> BuiltinCulture {
        BuiltinCulture {
            holiday_strategy: Arc::new(holiday_strategy),
            weekday_policy: Arc::new(DefaultWeekdayPolicy)
        }
    }
}

static BUILTIN_CULTURES: LazyLock<HashMap<&'static str, BuiltinCulture>> = LazyLock::new(|| {
    HashMap::from([
        (DEFAULT_CULTURE, BuiltinCulture::new(DefaultHolidayStrategy)),
        ("en-US", BuiltinCulture::new(united_states())),
        ("pt-PT", BuiltinCulture::new(portugal()))
    ])
});

static GLOBAL_REGISTRY: LazyLock<CultureRegistry> = LazyLock::new(|| CultureRegistry::builder().build());

/// Maps culture identifiers to working-day rules.
///
/// Lookup order per capability: override locator, custom cultures, built-in
/// cultures, then the same tables under the fallback identifier. Resolved
/// cultures are cached per exact identifier for the registry's lifetime.
pub struct CultureRegistry {
    locate_holiday_strategy: Option<HolidayStrategyLocator>,
    locate_weekday_policy: Option<WeekdayPolicyLocator>,
    custom_cultures: HashMap<String, WorkingDayCulture>,
    fallback_culture: Option<String>,
    default_culture: String,
    resolved: RwLock<HashMap<String, WorkingDayCulture>>
}

impl CultureRegistry {
    pub fn builder() -> CultureRegistryBuilder {
        CultureRegistryBuilder::default()
    }

    /// Process-wide registry with only the built-in cultures.
    pub fn global() -> &'static CultureRegistry {
        &GLOBAL_REGISTRY
    }

    /// Identifiers of the built-in cultures.
    pub fn builtin_cultures() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = BUILTIN_CULTURES.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn fallback_culture(&self) -> Option<&str> {
        self.fallback_culture.as_deref()
    }

    pub fn default_culture_name(&self) -> &str {
        &self.default_culture
    }

    /// The ambient culture used when a caller does not name one.
    pub fn default_culture(&self) -> Result<WorkingDayCulture> {
        self.resolve(&self.default_culture)
    }

    /// Number of identifiers resolved and cached so far.
    pub fn cached_cultures(&self) -> usize {
        self.resolved.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn resolve(&self, name: &str) -> Result<WorkingDayCulture> {
        if let Some(culture) = self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name) {
            return Ok(culture.clone());
        }

        let culture = self.build(name)?;
        debug!(culture = name, "resolved working day culture");
        let mut resolved = self.resolved.write().unwrap_or_else(PoisonError::into_inner);
        Ok(resolved.entry(name.to_owned()).or_insert(culture).clone())
    }

    fn build(&self, name: &str) -> Result<WorkingDayCulture> {
        let holiday_override = self.locate_holiday_strategy.as_ref().and_then(|locate| locate(name));
        let policy_override = self.locate_weekday_policy.as_ref().and_then(|locate| locate(name));

        if let (Some(holiday_strategy), Some(weekday_policy)) = (&holiday_override, &policy_override) {
            return Ok(WorkingDayCulture::new(name, Arc::clone(holiday_strategy), Arc::clone(weekday_policy)));
        }

        let (holiday_strategy, weekday_policy) = self.lookup_tables(name)?;
        Ok(WorkingDayCulture::new(
            name,
            holiday_override.unwrap_or(holiday_strategy),
            policy_override.unwrap_or(weekday_policy)
        ))
    }

    fn lookup_tables(&self, name: &str) -> Result<(Arc<dyn HolidayStrategy>, Arc<dyn WeekdayPolicy>)> {
        if let Some(found) = self.lookup_table(name) {
            return Ok(found);
        }
        if let Some(fallback) = self.fallback_culture.as_deref() {
            if let Some(found) = self.lookup_table(fallback) {
                warn!(culture = name, fallback, "unsupported culture, using fallback rules");
                return Ok(found);
            }
        }
        Err(WorkingDayError::UnsupportedCulture(name.to_owned()))
    }

    fn lookup_table(&self, name: &str) -> Option<(Arc<dyn HolidayStrategy>, Arc<dyn WeekdayPolicy>)> {
        if let Some(custom) = self.custom_cultures.get(name) {
            return Some((Arc::clone(custom.holiday_strategy()), Arc::clone(custom.weekday_policy())));
        }
        BUILTIN_CULTURES.get(name)
            .map(|builtin| (Arc::clone(&builtin.holiday_strategy), Arc::clone(&builtin.weekday_policy)))
    }
}

#[derive(Default)]
pub struct CultureRegistryBuilder {
    locate_holiday_strategy: Option<HolidayStrategyLocator>,
    locate_weekday_policy: Option<WeekdayPolicyLocator>,
    custom_cultures: HashMap<String, WorkingDayCulture>,
    fallback_culture: Option<String>,
    default_culture: Option<String>
}

impl CultureRegistryBuilder {
    pub fn locate_holiday_strategy<F>(mut self, locate: F) -> Self
        where F: Fn(&str) -> Option<Arc<dyn HolidayStrategy>> + Send + Sync + 'static {
        self.locate_holiday_strategy = Some(Arc::new(locate));
        self
    }

    pub fn locate_weekday_policy<F>(mut self, locate: F) -> Self
        where F: Fn(&str) -> Option<Arc<dyn WeekdayPolicy>> + Send + Sync + 'static {
        self.locate_weekday_policy = Some(Arc::new(locate));
        self
    }

    /// Adds or shadows a culture under its own name.
    pub fn register(mut self, culture: WorkingDayCulture) -> Self {
        self.custom_cultures.insert(culture.name().to_owned(), culture);
        self
    }

    pub fn fallback_culture(mut self, name: impl Into<String>) -> Self {
        self.fallback_culture = Some(name.into());
        self
    }

    pub fn default_culture(mut self, name: impl Into<String>) -> Self {
        self.default_culture = Some(name.into());
        self
    }

    pub fn build(self) -> CultureRegistry {
        CultureRegistry {
            locate_holiday_strategy: self.locate_holiday_strategy,
            locate_weekday_policy: self.locate_weekday_policy,
            custom_cultures: self.custom_cultures,
            fallback_culture: self.fallback_culture,
            default_culture: self.default_culture.unwrap_or_else(|| DEFAULT_CULTURE.to_owned()),
            resolved: RwLock::new(HashMap::new())
        }
    }
}
