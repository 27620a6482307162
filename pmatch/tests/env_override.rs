// Kept in its own test binary: the environment is process-wide.
use pmatch::{Method, ProblemArgs, load};
use std::path::PathBuf;

#[test]
fn environment_overrides_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos/catalog.toml");
    assert!(!load(&path).unwrap().allow_unassigned);

    // SAFETY: this is the only test in the binary, so no other thread reads the environment
    unsafe { std::env::set_var("PMATCH_ALLOW_UNASSIGNED", "true") };

    let config = load(&path).unwrap();
    assert!(config.allow_unassigned);
    assert_eq!(config.catalog.len(), 47);

    // the flag can only relax the policy, never restore strictness
    let args = ProblemArgs {
        config: path,
        allow_unassigned: false,
    };
    let config = args.load().unwrap();
    assert!(config.allow_unassigned);

    // one student over 47 papers now solves instead of failing
    let agents = pmatch::read_agents(
        "Timestamp,Email,Name,First\n1,ada@example.com,Ada,Paxos Made Simple\n".as_bytes(),
    )
    .unwrap();
    let outcome = Method::Local.assign(config, Some(1), &agents).unwrap();
    assert_eq!(outcome.assignment.assigned(), 1);
    assert_eq!(outcome.total_cost, 0);

    // SAFETY: as above
    unsafe { std::env::remove_var("PMATCH_ALLOW_UNASSIGNED") };
}
