use std::collections::HashMap;
use std::sync::Once;

use opt_core::app::tracing::AppTracingBuilder;
use opt_core::{Opt, OptionalMissingError};
use opt_ext::{OptSeqExt, TryGet, TrySeqExt};

fn init_tracing() {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let _ = AppTracingBuilder::default().with_test_writer(true).build();
  });
}

#[derive(Clone, PartialEq, Debug)]
struct User {
  name: &'static str,
  manager: Option<&'static str>,
  age: u32,
}

fn users() -> HashMap<&'static str, User> {
  [
    User { name: "ada", manager: None, age: 36 },
    User { name: "grace", manager: Some("ada"), age: 45 },
    User { name: "linus", manager: Some("grace"), age: 28 },
    User { name: "ken", manager: Some("dennis"), age: 50 },
  ].into_iter().map(|user| (user.name, user)).collect()
}

fn manager_of<'a>(users: &'a HashMap<&'static str, User>, name: &str) -> Opt<&'a User> {
  users.try_get(name)
    .bind(|user| Opt::from(user.manager))
    .bind(|manager| users.try_get(manager))
}

#[test]
fn chains_lookups() {
  init_tracing();
  let users = users();

  assert_eq!(manager_of(&users, "linus").map(|user| user.name), Opt::Some("grace"));
  assert_eq!(manager_of(&users, "grace").map(|user| user.name), Opt::Some("ada"));
  assert!(manager_of(&users, "ada").is_none());
  assert!(manager_of(&users, "ken").is_none());
  assert!(manager_of(&users, "nobody").is_none());

  let age = manager_of(&users, "linus").map(|user| user.age).filter(|age| *age > 40);
  assert_eq!(age.get(), Ok(45));
  assert_eq!(manager_of(&users, "ada").get(), Err(OptionalMissingError));
}

#[test]
fn sequence_scenarios() {
  init_tracing();

  assert_eq!([1, 2, 3].into_iter().try_max(), Opt::Some(3));
  assert_eq!(Vec::<i32>::new().into_iter().try_max(), Opt::None);

  let opts = [Opt::Some(0), Opt::None, Opt::Some(1)];
  assert_eq!(opts.into_iter().filter_some().collect::<Vec<_>>(), vec![0, 1]);
  assert_eq!(opts.into_iter().collect_all::<Vec<_>>(), Opt::None);
}

#[test]
fn lookups_compose_with_combinators() {
  init_tracing();
  let users = users();

  let oldest_managed = users.values()
    .filter(|user| user.manager.is_some())
    .try_max_by_key(|user| user.age)
    .map(|user| user.name);
  assert_eq!(oldest_managed, Opt::Some("ken"));

  let ages: Opt<Vec<u32>> = ["ada", "grace"].into_iter()
    .map(|name| users.try_get(name).map(|user| user.age))
    .collect_all();
  assert_eq!(ages, Opt::Some(vec![36, 45]));

  let total_age = ["ada", "missing", "linus"].into_iter()
    .map(|name| users.try_get(name))
    .filter_some()
    .map(|user| user.age)
    .sum::<u32>();
  assert_eq!(total_age, 64);
}

#[test]
fn fallible_construction_feeds_lookups() {
  init_tracing();
  let users = users();

  let parsed_index = |input: &str| Opt::from_fallible(|| input.parse::<usize>());
  let mut names = users.keys().copied().collect::<Vec<_>>();
  names.sort_unstable();

  let pick = |input: &str| parsed_index(input).bind(|index| names.iter().try_element_at(index)).copied();
  assert_eq!(pick("0"), Opt::Some("ada"));
  assert_eq!(pick("9"), Opt::None);
  assert_eq!(pick("zero"), Opt::None);

  let first_long = Opt::from_panicking(|| names.iter().find(|name| name.len() > 4).copied().expect("a long name"));
  assert_eq!(first_long, Opt::Some("grace"));
  assert_eq!(names.iter().copied().try_single(), Opt::None);
}
