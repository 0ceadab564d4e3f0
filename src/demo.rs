// Demo mode: a scripted tour of the page
//
// Drives the same code paths as a real user: the pointer sweeps across the
// hero (leaving a trail), hovers the nav buttons, the page scrolls through
// each section, and a contact form is filled in and sent. Useful for
// recordings and for eyeballing the animations without a mouse.
//
// Run with: daizy --demo (or DAIZY_DEMO=1)

use crate::contact::Field;
use crate::events::{DemoStep, SiteEvent};
use crate::site::{Anchor, ModalOwner};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::time::sleep;

/// Delay between pointer samples in a sweep (~60 Hz)
const POINTER_STEP_MS: u64 = 16;

/// Play the tour once, then idle until shutdown
pub async fn run_demo(tx: mpsc::Sender<SiteEvent>, mut shutdown_rx: oneshot::Receiver<()>) {
    // Let the hero entrance play first
    sleep(Duration::from_millis(2500)).await;

    for (step, delay_ms) in demo_script() {
        if shutdown_rx.try_recv().is_ok() {
            return;
        }
        if tx.send(SiteEvent::Demo(step)).await.is_err() {
            break;
        }
        sleep(Duration::from_millis(delay_ms)).await;
    }

    tracing::info!("Demo tour finished");

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => {
                tracing::info!("Demo received shutdown signal");
                return;
            }
            _ = sleep(Duration::from_secs(60)) => {}
        }
    }
}

/// Straight pointer sweep from one cell to another, one step per sample
fn sweep(from: (u16, u16), to: (u16, u16), steps: u16) -> Vec<(DemoStep, u64)> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let x = from.0 as f64 + (to.0 as f64 - from.0 as f64) * t;
            let y = from.1 as f64 + (to.1 as f64 - from.1 as f64) * t;
            (
                DemoStep::PointerTo {
                    x: x.round() as u16,
                    y: y.round() as u16,
                },
                POINTER_STEP_MS,
            )
        })
        .collect()
}

fn demo_script() -> Vec<(DemoStep, u64)> {
    let mut steps = Vec::new();

    // Shooting-star sweep across the hero
    steps.extend(sweep((4, 18), (70, 6), 40));
    steps.extend(sweep((70, 6), (20, 12), 30));
    steps.push((DemoStep::PointerTo { x: 20, y: 12 }, 800));

    // Scroll the page a wheel notch at a time to show the parallax
    for _ in 0..12 {
        steps.push((DemoStep::Scroll(3), 120));
    }
    steps.push((DemoStep::JumpTo(Anchor::Work), 1500));
    steps.extend(sweep((10, 10), (60, 20), 30));
    steps.push((DemoStep::JumpTo(Anchor::Services), 1500));
    steps.push((DemoStep::JumpTo(Anchor::Testimonials), 2000));

    // Contact flow from the nav bar
    steps.push((DemoStep::OpenContact(ModalOwner::Nav), 800));
    for (field, value) in [
        (Field::Name, "Ada"),
        (Field::Email, "ada@example.com"),
        (Field::Message, "Landing page for a new launch"),
    ] {
        steps.push((DemoStep::Fill(field, value.to_string()), 500));
    }
    steps.push((DemoStep::Submit, 3500));

    steps.push((DemoStep::JumpTo(Anchor::Top), 500));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_ends_on_target() {
        let path = sweep((0, 0), (10, 5), 5);
        assert_eq!(path.len(), 5);
        assert_eq!(path.last().unwrap().0, DemoStep::PointerTo { x: 10, y: 5 });
    }

    #[test]
    fn script_submits_a_complete_form() {
        let script = demo_script();
        let open = script
            .iter()
            .position(|(s, _)| matches!(s, DemoStep::OpenContact(_)))
            .unwrap();
        let submit = script
            .iter()
            .position(|(s, _)| *s == DemoStep::Submit)
            .unwrap();
        let filled: Vec<_> = script[open..submit]
            .iter()
            .filter_map(|(s, _)| match s {
                DemoStep::Fill(field, _) => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(filled, Field::ALL.to_vec());
        // Long enough after submit for the auto-close to play out
        assert!(script[submit].1 >= 3000);
    }

    #[tokio::test]
    async fn demo_stops_on_shutdown() {
        let (tx, _rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        shutdown_tx.send(()).unwrap();
        tokio::time::pause();
        // Paused clock auto-advances through the initial sleep
        run_demo(tx, shutdown_rx).await;
    }
}
