//! Demo data generator.
//!
//! On first start the database is filled with staff accounts, a product
//! catalog, pickup locations and a few years of orders. The random generator
//! is seeded from the configuration, so with the same seed and the same
//! `today` every run produces identical data.
//!
//! Seeding only happens when the user table is empty; any existing user means
//! the database is already in use and is left untouched.

pub mod catalog;
pub mod history;
pub mod names;

use crate::{
    config::GeneratorConfig,
    core::{
        order::{self, NewCustomer, NewOrder, NewOrderItem},
        pickup_location, product,
        user::{self, NewUser},
    },
    entities::{OrderState, Role, pickup_location as location_entity, product as product_entity},
    errors::{Error, Result},
};
use catalog::{UniformPicker, WeightedPicker, pick, random_price, random_product_name};
use chrono::{Datelike, Local, Months, NaiveDate, NaiveTime};
use history::{Actors, plan_history, random_due_time, random_state};
use names::{FIRST_NAMES, ITEM_COMMENTS, LAST_NAMES, PICKUP_LOCATIONS, VIP_DETAILS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

struct SeedUser {
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    password: &'static str,
    role: Role,
    locked: bool,
}

impl SeedUser {
    fn to_new_user(&self) -> NewUser {
        NewUser {
            email: self.email.to_string(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            password: self.password.to_string(),
            role: self.role,
            locked: self.locked,
        }
    }
}

const BAKER: SeedUser = SeedUser {
    email: "baker@bakery.local",
    first_name: "Heidi",
    last_name: "Carter",
    password: "baker",
    role: Role::Baker,
    locked: false,
};

const BARISTA: SeedUser = SeedUser {
    email: "barista@bakery.local",
    first_name: "Malin",
    last_name: "Castro",
    password: "barista",
    role: Role::Barista,
    locked: true,
};

const ADMIN: SeedUser = SeedUser {
    email: "admin@bakery.local",
    first_name: "Göran",
    last_name: "Rich",
    password: "admin",
    role: Role::Admin,
    locked: true,
};

// Accounts the admin screens are allowed to remove.
const DELETABLE_USERS: [SeedUser; 2] = [
    SeedUser {
        email: "peter@bakery.local",
        first_name: "Peter",
        last_name: "Bush",
        password: "peter",
        role: Role::Barista,
        locked: false,
    },
    SeedUser {
        email: "mary@bakery.local",
        first_name: "Mary",
        last_name: "Ocon",
        password: "mary",
        role: Role::Baker,
        locked: true,
    },
];

/// Row counts after a completed seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub products: u64,
    pub pickup_locations: u64,
    pub orders: u64,
}

/// What [`DataGenerator::load_data`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The database already had users; nothing was written
    Skipped,
    /// The database was empty and has been filled
    Generated(SeedSummary),
}

/// Fills an empty database with demo data.
pub struct DataGenerator {
    db: DatabaseConnection,
    config: GeneratorConfig,
    today: NaiveDate,
    rng: StdRng,
}

impl DataGenerator {
    /// Creates a generator that treats the current local date as "today".
    #[must_use]
    pub fn new(db: DatabaseConnection, config: GeneratorConfig) -> Self {
        Self::with_today(db, config, Local::now().date_naive())
    }

    /// Creates a generator with a fixed notion of "today".
    #[must_use]
    pub fn with_today(db: DatabaseConnection, config: GeneratorConfig, today: NaiveDate) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            db,
            config,
            today,
            rng,
        }
    }

    /// Seeds the database unless it already contains users.
    ///
    /// All rows are written in a single transaction, so a failure leaves the
    /// database empty and the next start tries again.
    ///
    /// # Errors
    /// Returns an error if the configuration is unusable or any database
    /// operation fails.
    #[instrument(skip(self), fields(seed = self.config.seed, today = %self.today))]
    pub async fn load_data(&mut self) -> Result<SeedOutcome> {
        if user::count_users(&self.db).await? != 0 {
            info!("Using existing database");
            return Ok(SeedOutcome::Skipped);
        }
        self.config.validate()?;
        info!("Generating demo data");

        let txn = self.db.begin().await?;

        info!("... generating users");
        let actors = Self::create_users(&txn).await?;

        info!("... generating products");
        let mut used_names = HashSet::new();
        let product_count = self.config.product_count;
        let extra_product_count = self.config.extra_product_count;
        let products = self
            .create_products(&txn, product_count, &mut used_names)
            .await?;
        self.create_products(&txn, extra_product_count, &mut used_names)
            .await?;

        info!("... generating pickup locations");
        let locations = Self::create_pickup_locations(&txn).await?;

        info!("... generating orders");
        self.create_orders(
            &txn,
            &WeightedPicker::new(products),
            &UniformPicker::new(locations),
            actors,
        )
        .await?;

        let summary = summarize(&txn).await?;
        txn.commit().await?;

        info!(
            "Generated demo data: {} users, {} products, {} pickup locations, {} orders",
            summary.users, summary.products, summary.pickup_locations, summary.orders
        );
        Ok(SeedOutcome::Generated(summary))
    }

    async fn create_users(txn: &DatabaseTransaction) -> Result<Actors> {
        let baker = user::create_user(txn, BAKER.to_new_user()).await?;
        let barista = user::create_user(txn, BARISTA.to_new_user()).await?;
        user::create_user(txn, ADMIN.to_new_user()).await?;
        for deletable in &DELETABLE_USERS {
            user::create_user(txn, deletable.to_new_user()).await?;
        }
        Ok(Actors {
            barista_id: barista.id,
            baker_id: baker.id,
        })
    }

    async fn create_products(
        &mut self,
        txn: &DatabaseTransaction,
        count: usize,
        used_names: &mut HashSet<String>,
    ) -> Result<Vec<product_entity::Model>> {
        let mut products = Vec::with_capacity(count);
        while products.len() < count {
            let name = random_product_name(&mut self.rng);
            if !used_names.insert(name.clone()) {
                continue;
            }
            let price = random_price(&mut self.rng);
            products.push(product::create_product(txn, &name, price).await?);
        }
        Ok(products)
    }

    async fn create_pickup_locations(
        txn: &DatabaseTransaction,
    ) -> Result<Vec<location_entity::Model>> {
        let mut locations = Vec::with_capacity(PICKUP_LOCATIONS.len());
        for name in PICKUP_LOCATIONS {
            locations.push(pickup_location::create_pickup_location(txn, name).await?);
        }
        Ok(locations)
    }

    /// Creates one order due today at 08:00, then a growing number of orders
    /// per day from January 1st `years_to_include` years back until a month
    /// from today.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    async fn create_orders(
        &mut self,
        txn: &DatabaseTransaction,
        products: &WeightedPicker<product_entity::Model>,
        locations: &UniformPicker<location_entity::Model>,
        actors: Actors,
    ) -> Result<u64> {
        let today = self.today;
        let years = self.config.years_to_include;
        let oldest = NaiveDate::from_ymd_opt(today.year() - years, 1, 1).ok_or_else(|| {
            Error::Config {
                message: format!("Cannot go back {years} years from {today}"),
            }
        })?;
        let newest = today
            .checked_add_months(Months::new(1))
            .ok_or_else(|| Error::Config {
                message: format!("No date one month after {today}"),
            })?;

        // Keep today's first order simple: just placed, a single item.
        let mut first = self.plan_order(today, products, locations, actors);
        first.due_time = NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default();
        first.state = OrderState::New;
        first.items.truncate(1);
        first.history.truncate(1);
        order::create_order(txn, first).await?;
        let mut created = 1_u64;

        let mut due = oldest;
        while due < newest {
            // Business grows a little every month.
            let relative_year = due.year() - today.year() + years;
            let relative_month = f64::from(relative_year) * 12.0 + f64::from(due.month());
            let multiplier = 1.0 + 0.03 * relative_month;
            let orders_this_day =
                (f64::from(self.rng.random_range(0..10_u32)) + multiplier) as u64;

            for _ in 0..orders_this_day {
                let new_order = self.plan_order(due, products, locations, actors);
                order::create_order(txn, new_order).await?;
            }
            created += orders_this_day;

            if due.day() == 1 {
                debug!("Orders generated through {due}: {created}");
            }
            due = due.succ_opt().ok_or_else(|| Error::Config {
                message: format!("No day after {due}"),
            })?;
        }

        Ok(created)
    }

    fn plan_order(
        &mut self,
        due_date: NaiveDate,
        products: &WeightedPicker<product_entity::Model>,
        locations: &UniformPicker<location_entity::Model>,
        actors: Actors,
    ) -> NewOrder {
        let customer = self.random_customer();
        let pickup_location_id = locations.pick(&mut self.rng).id;
        let due_time = random_due_time(&mut self.rng);
        let state = random_state(&mut self.rng, due_date, self.today);

        let item_count = self.rng.random_range(1..=3);
        let mut items: Vec<NewOrderItem> = Vec::with_capacity(item_count);
        while items.len() < item_count {
            let product = products.pick(&mut self.rng);
            if items.iter().any(|item| item.product_id == product.id) {
                continue;
            }
            let quantity = self.rng.random_range(1..=10);
            let comment = (self.rng.random_range(0..5) == 0)
                .then(|| pick(&mut self.rng, ITEM_COMMENTS).to_string());
            items.push(NewOrderItem {
                product_id: product.id,
                quantity,
                comment,
            });
        }

        let history = plan_history(&mut self.rng, state, due_date, due_time, actors);

        NewOrder {
            customer,
            pickup_location_id,
            due_date,
            due_time,
            state,
            items,
            history,
        }
    }

    fn random_customer(&mut self) -> NewCustomer {
        let first = pick(&mut self.rng, FIRST_NAMES);
        let last = pick(&mut self.rng, LAST_NAMES);
        let phone = self.rng.random_range(0..10_000);
        let details = (self.rng.random_range(0..10) == 0).then(|| VIP_DETAILS.to_string());
        NewCustomer {
            full_name: format!("{first} {last}"),
            phone_number: format!("+1-555-{phone:04}"),
            details,
        }
    }
}

async fn summarize<C>(db: &C) -> Result<SeedSummary>
where
    C: ConnectionTrait,
{
    Ok(SeedSummary {
        users: user::count_users(db).await?,
        products: product::count_products(db).await?,
        pickup_locations: pickup_location::count_pickup_locations(db).await?,
        orders: order::count_orders(db).await?,
    })
}
