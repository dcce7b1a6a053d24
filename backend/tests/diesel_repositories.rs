//! Integration tests for the Diesel repositories against embedded PostgreSQL.
//!
//! Each test provisions its own database from the embedded migrations. Set
//! `SKIP_TEST_CLUSTER=1` where the cluster cannot start.

use chrono::{DateTime, TimeZone, Utc};
use exercise_tracker::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use exercise_tracker::domain::{
    DurationMinutes, ExerciseLogFilter, LogLimit, NewExercise, UserId, Username,
};
use exercise_tracker::outbound::persistence::{
    DbPool, DieselExerciseRepository, DieselUserRepository, PoolConfig,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::embedded_postgres::drop_table;
use support::{handle_cluster_setup_failure, migrate_schema, reset_database};

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    database_url: String,
    users: DieselUserRepository,
    exercises: DieselExerciseRepository,
}

impl TestContext {
    fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        self.runtime.block_on(fut)
    }

    fn insert_user(&self, name: &str) -> UserId {
        let username = Username::new(name).expect("valid username");
        *self
            .block_on(self.users.insert(&username))
            .expect("insert user")
            .id()
    }

    fn insert_exercise(&self, user_id: UserId, description: &str, date: DateTime<Utc>) {
        let exercise = NewExercise {
            user_id,
            description: description.to_owned(),
            duration: DurationMinutes::new(30).expect("valid duration"),
            date,
        };
        self.block_on(self.exercises.insert(&exercise))
            .expect("insert exercise");
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let db_name = format!("tracker_{}", Uuid::new_v4().simple());
    reset_database(&cluster, &db_name)?;
    let database_url = cluster.connection().database_url(&db_name);
    migrate_schema(&database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        database_url,
        users: DieselUserRepository::new(pool.clone()),
        exercises: DieselExerciseRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0)
        .single()
        .expect("valid date")
}

#[rstest]
fn users_round_trip_in_insertion_order(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: users_round_trip_in_insertion_order skipped");
        return;
    };

    let zed = ctx.insert_user("zed");
    let ada = ctx.insert_user("ada");

    let listed = ctx.block_on(ctx.users.list()).expect("list users");
    let ids: Vec<UserId> = listed.iter().map(|user| *user.id()).collect();
    assert_eq!(ids, vec![zed, ada]);

    let found = ctx
        .block_on(ctx.users.find_by_id(&ada))
        .expect("find user")
        .expect("user exists");
    assert_eq!(found.username().as_ref(), "ada");
}

#[rstest]
fn duplicate_usernames_are_allowed(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_usernames_are_allowed skipped");
        return;
    };

    let first = ctx.insert_user("twin");
    let second = ctx.insert_user("twin");
    assert_ne!(first, second);
}

#[rstest]
fn unknown_users_are_absent(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_users_are_absent skipped");
        return;
    };

    let missing = UserId::from_uuid(Uuid::new_v4());
    let found = ctx.block_on(ctx.users.find_by_id(&missing)).expect("query succeeds");
    assert!(found.is_none());
}

#[rstest]
fn log_entries_honour_bounds_and_limit(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: log_entries_honour_bounds_and_limit skipped");
        return;
    };

    let owner = ctx.insert_user("runner");
    let other = ctx.insert_user("walker");
    ctx.insert_exercise(owner, "late", day(20));
    ctx.insert_exercise(owner, "early", day(5));
    ctx.insert_exercise(owner, "middle", day(10));
    ctx.insert_exercise(other, "not mine", day(10));

    let all = ctx
        .block_on(ctx.exercises.find_log_entries(&ExerciseLogFilter::for_user(owner)))
        .expect("read log");
    let descriptions: Vec<&str> = all.iter().map(|entry| entry.description.as_str()).collect();
    assert_eq!(descriptions, ["late", "early", "middle"]);

    let bounded = ExerciseLogFilter::for_user(owner)
        .with_from(Some(day(5)))
        .with_to(Some(day(10)))
        .with_limit(LogLimit::new(1).ok());
    let entries = ctx
        .block_on(ctx.exercises.find_log_entries(&bounded))
        .expect("read bounded log");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description, "early");
    assert_eq!(entries[0].date, day(5));
}

#[rstest]
fn missing_tables_surface_query_errors(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: missing_tables_surface_query_errors skipped");
        return;
    };

    drop_table(&ctx.database_url, "users").expect("drop users");
    drop_table(&ctx.database_url, "exercises").expect("drop exercises");

    let user_err = ctx
        .block_on(ctx.users.list())
        .expect_err("users table is gone");
    assert!(matches!(user_err, UserPersistenceError::Query { .. }), "{user_err:?}");

    let filter = ExerciseLogFilter::for_user(UserId::from_uuid(Uuid::new_v4()));
    let exercise_err = ctx
        .block_on(ctx.exercises.find_log_entries(&filter))
        .expect_err("exercises table is gone");
    assert!(
        matches!(exercise_err, ExercisePersistenceError::Query { .. }),
        "{exercise_err:?}"
    );
}
