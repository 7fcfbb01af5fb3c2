use bootflow::{
    run_boot_sequence, BootError, BootProcedure, Handoff, ProcedureError, ProcedureRunner,
};
use bootstate::{BootFlow, BootState, InvalidTransition};
use device::InterfaceKind;
use global_data::{BootEnv, EnvError, ResolvedBootTarget, ENV_DEVTYPE};
use util::cb_err::CbErr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Method {
    Fit,
    Packed,
    Distro,
}

const PROCEDURES: [BootProcedure<Method>; 3] = [
    BootProcedure::new(Method::Fit, "boot_fit"),
    BootProcedure::new(Method::Packed, "bootrkp"),
    BootProcedure::terminal(Method::Distro, "distro_bootcmd"),
];

/// Runner double: hands off from `boots`, fails everything else
struct Runner {
    boots: Option<Method>,
    runs: Vec<Method>,
    seen_devtype: Vec<Option<String>>,
}

impl Runner {
    fn new(boots: Option<Method>) -> Self {
        Self {
            boots,
            runs: Vec::new(),
            seen_devtype: Vec::new(),
        }
    }
}

impl ProcedureRunner<Method> for Runner {
    fn run(
        &mut self,
        procedure: &BootProcedure<Method>,
        env: &BootEnv,
    ) -> Result<Handoff, ProcedureError> {
        self.runs.push(procedure.id);
        let devtype = env.get(ENV_DEVTYPE).map(|v| v.as_str().to_string());
        self.seen_devtype.push(devtype);
        if self.boots == Some(procedure.id) {
            Ok(Handoff::new(0x0208_0000))
        } else if env.target().is_none() {
            Err(ProcedureError::NoBootDevice)
        } else {
            Err(ProcedureError::ImageNotFound)
        }
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn emmc_env() -> BootEnv {
    let emmc = ResolvedBootTarget::new(InterfaceKind::Emmc, 0);
    let mut env = BootEnv::new();
    env.set_target(emmc).unwrap();
    env
}

#[test]
fn fit_handoff_stops_the_sequence() -> Result<(), BootError> {
    init_logger();
    let env = emmc_env();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(Some(Method::Fit));

    let done = run_boot_sequence(&PROCEDURES, &mut runner, &env, &mut flow)?;

    assert_eq!(done.index, 0);
    assert_eq!(done.procedure.name, "boot_fit");
    assert_eq!(done.handoff.entry(), 0x0208_0000);
    assert_eq!(runner.runs, [Method::Fit]);
    assert_eq!(flow.state(), BootState::Transferred(0));
    Ok(())
}

#[test]
fn procedures_run_in_order_until_handoff() -> Result<(), BootError> {
    init_logger();
    let env = emmc_env();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(Some(Method::Distro));

    let done = run_boot_sequence(&PROCEDURES, &mut runner, &env, &mut flow)?;

    assert_eq!(done.procedure.id, Method::Distro);
    assert_eq!(runner.runs, [Method::Fit, Method::Packed, Method::Distro]);
    assert_eq!(flow.state(), BootState::Transferred(2));
    Ok(())
}

#[test]
fn every_failure_exhausts_once() {
    init_logger();
    let env = emmc_env();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(None);

    let res = run_boot_sequence(&PROCEDURES, &mut runner, &env, &mut flow);

    assert_eq!(res, Err(BootError::AllProceduresExhausted { attempted: 3 }));
    assert_eq!(runner.runs, [Method::Fit, Method::Packed, Method::Distro]);
    assert_eq!(flow.state(), BootState::Exhausted);

    // no retries within the same boot cycle
    let again = run_boot_sequence(&PROCEDURES, &mut runner, &env, &mut flow);
    assert_eq!(
        again,
        Err(BootError::State(InvalidTransition {
            from: BootState::Exhausted,
            to: BootState::Attempting(0),
        }))
    );
    assert_eq!(runner.runs.len(), 3);
}

#[test]
fn procedures_read_the_resolved_device() -> Result<(), BootError> {
    init_logger();
    let env = emmc_env();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(Some(Method::Packed));

    run_boot_sequence(&PROCEDURES, &mut runner, &env, &mut flow)?;

    assert_eq!(
        runner.seen_devtype,
        [Some("mmc".to_string()), Some("mmc".to_string())]
    );
    Ok(())
}

#[test]
fn unresolved_device_still_runs_every_procedure() {
    init_logger();
    let env = BootEnv::new();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(None);

    let res = run_boot_sequence(&PROCEDURES, &mut runner, &env, &mut flow);

    assert_eq!(res, Err(BootError::AllProceduresExhausted { attempted: 3 }));
    assert_eq!(runner.seen_devtype, [None, None, None]);
}

#[test]
fn terminal_procedure_ends_the_sequence() {
    init_logger();
    let procedures = [
        BootProcedure::terminal(Method::Fit, "boot_fit"),
        BootProcedure::new(Method::Packed, "bootrkp"),
    ];
    let env = emmc_env();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(Some(Method::Packed));

    let res = run_boot_sequence(&procedures, &mut runner, &env, &mut flow);

    assert_eq!(res, Err(BootError::AllProceduresExhausted { attempted: 1 }));
    assert_eq!(runner.runs, [Method::Fit]);
}

#[test]
fn empty_procedure_list_exhausts() {
    init_logger();
    let env = emmc_env();
    let mut flow = BootFlow::new();
    let mut runner = Runner::new(Some(Method::Fit));

    let res = run_boot_sequence(&[], &mut runner, &env, &mut flow);

    assert_eq!(res, Err(BootError::AllProceduresExhausted { attempted: 0 }));
    assert!(runner.runs.is_empty());
    assert_eq!(flow.state(), BootState::Exhausted);
}

#[test]
fn errors_map_to_status_codes() {
    let err = BootError::AllProceduresExhausted { attempted: 3 };
    assert_eq!(CbErr::from(err), CbErr::BootMethodsExhausted);
    assert_eq!(BootError::DeviceNotResolved.code().code(), -500);

    let err = BootError::Env(EnvError::AlreadySet);
    assert_eq!(CbErr::from(err).code(), -400);
}
