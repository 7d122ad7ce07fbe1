use super::*;

fn run(g: &mut PerformanceGovernor, start: Duration, fps: u32, seconds: f64) -> (Duration, Vec<PerformanceTransition>) {
    let dt = Duration::from_secs_f64(1.0 / f64::from(fps));
    let frames = (seconds * f64::from(fps)).ceil() as u32;
    let mut now = start;
    let mut out = Vec::new();
    for _ in 0..frames {
        now += dt;
        if let Some(t) = g.tick(now) {
            out.push(t);
        }
    }
    (now, out)
}

fn one_way() -> PerformanceGovernor {
    PerformanceGovernor::new(PerformancePolicy::OneWay, 20, Duration::from_millis(1000))
}

#[test]
fn healthy_rate_never_degrades() {
    let mut g = one_way();
    g.reset_window(Duration::ZERO);
    let (_, transitions) = run(&mut g, Duration::ZERO, 60, 5.0);
    assert!(transitions.is_empty());
    assert!(!g.is_low_performance());
    assert_eq!(g.last_sample().unwrap().fps, 60);
}

#[test]
fn low_rate_degrades_exactly_once() {
    let mut g = one_way();
    g.reset_window(Duration::ZERO);
    let (now, first) = run(&mut g, Duration::ZERO, 15, 1.5);
    assert_eq!(first, vec![PerformanceTransition::Degraded]);
    assert!(g.is_low_performance());

    let (_, second) = run(&mut g, now, 15, 3.0);
    assert!(second.is_empty());
    assert!(g.is_low_performance());
}

#[test]
fn one_way_policy_never_recovers() {
    let mut g = one_way();
    g.reset_window(Duration::ZERO);
    let (now, _) = run(&mut g, Duration::ZERO, 10, 1.5);
    let (_, transitions) = run(&mut g, now, 60, 10.0);
    assert!(transitions.is_empty());
    assert!(g.is_low_performance());
}

#[test]
fn recover_policy_needs_sustained_healthy_windows() {
    let policy = PerformancePolicy::Recover {
        recover_fps: 50,
        sustain_windows: 3,
    };
    let mut g = PerformanceGovernor::new(policy, 20, Duration::from_millis(1000));
    g.reset_window(Duration::ZERO);
    let (now, _) = run(&mut g, Duration::ZERO, 10, 1.5);
    assert!(g.is_low_performance());

    let (now, transitions) = run(&mut g, now, 60, 2.0);
    assert!(transitions.is_empty());

    let (_, transitions) = run(&mut g, now, 60, 2.5);
    assert_eq!(transitions, vec![PerformanceTransition::Recovered]);
    assert!(!g.is_low_performance());
}

#[test]
fn no_sample_before_the_window_closes() {
    let mut g = one_way();
    g.reset_window(Duration::ZERO);
    assert_eq!(g.tick(Duration::from_millis(500)), None);
    assert!(g.last_sample().is_none());
}
