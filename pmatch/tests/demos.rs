use pm_core::models::{ItemId, Status};
use pm_solver::Formulation;
use pmatch::{ExportFormat, Method, OutputFormat, ProblemArgs, load, read_agents};
use std::{fs::File, path::PathBuf};

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../demos")
        .join(name)
}

#[test]
fn loads_full_catalog() {
    let config = load(&demo("catalog.toml")).unwrap();
    assert_eq!(config.catalog.len(), 47);
    assert!(!config.allow_unassigned);
    assert_eq!(
        config.catalog.get_index(0),
        Some(&ItemId::from("The UNIX Time-Sharing System"))
    );
}

#[test]
fn missing_config_is_an_error() {
    assert!(load(&demo("no-such-file.toml")).is_err());
}

#[test]
fn flag_overrides_file() {
    let strict = ProblemArgs {
        config: demo("catalog.toml"),
        allow_unassigned: false,
    };
    assert!(!strict.load().unwrap().allow_unassigned);

    let relaxed = ProblemArgs {
        config: demo("catalog.toml"),
        allow_unassigned: true,
    };
    let config = relaxed.load().unwrap();
    assert!(config.allow_unassigned);
    assert_eq!(config.catalog.len(), 47);
}

#[test]
fn solves_seminar() {
    let config = load(&demo("seminar.toml")).unwrap();
    let agents = read_agents(File::open(demo("rankings.csv")).unwrap()).unwrap();
    assert_eq!(agents.len(), 3);

    let outcome = Method::Exact.assign(config.clone(), None, &agents).unwrap();
    assert_eq!(outcome.status, Status::Optimal);
    // Ada and Alan get a first choice, Grace a fourth choice
    assert_eq!(outcome.total_cost, 3);

    let local = Method::Local.assign(config, Some(11), &agents).unwrap();
    assert!(local.total_cost >= outcome.total_cost);

    let mut buffer = Vec::new();
    OutputFormat::Text
        .render(&outcome, &agents, &mut buffer)
        .unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(
        text,
        "Paxos Made Simple: Ada Lovelace (ada@example.com)\n\
         The Google File System: Grace Hopper (grace@example.com)\n\
         seL4: Formal Verification of an OS Kernel: Alan Turing (alan@example.com)\n"
    );
}

#[test]
fn full_catalog_needs_unassigned_slots() {
    let config = load(&demo("catalog.toml")).unwrap();
    let agents = read_agents(File::open(demo("rankings.csv")).unwrap()).unwrap();
    assert!(Method::Exact.assign(config.clone(), None, &agents).is_err());

    let outcome = Method::Exact
        .assign(config.with_unassigned(true), None, &agents)
        .unwrap();
    assert_eq!(outcome.assignment.assigned(), 3);
    assert_eq!(outcome.total_cost, 0);
}

#[test]
fn exports_seminar_program() {
    let config = load(&demo("seminar.toml")).unwrap();
    let agents = read_agents(File::open(demo("rankings.csv")).unwrap()).unwrap();
    let program = Formulation::new(&config, &agents);

    let mut buffer = Vec::new();
    ExportFormat::Lp.export(&program, &mut buffer).unwrap();
    let lp = String::from_utf8(buffer).unwrap();
    assert!(lp.starts_with("\\ Problem: paper_assignment\n"));
    assert!(lp.contains(" p_2: 1 x_2_0 + 1 x_2_1 + 1 x_2_2 = 1\n"));
}
