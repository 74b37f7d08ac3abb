use yew::prelude::*;

use crate::hooks::{use_frame_loop, use_reduced_motion};
use crate::motion::KeyframeLoop;

const DRIFT_X: [f64; 5] = [0.0, 24.0, -16.0, 12.0, 0.0];
const DRIFT_Y: [f64; 5] = [0.0, -18.0, 14.0, -8.0, 0.0];
const BREATHE: [f64; 5] = [1.0, 1.08, 1.02, 1.06, 1.0];

struct Blob {
    class: &'static str,
    x: KeyframeLoop,
    y: KeyframeLoop,
    scale: KeyframeLoop,
}

impl Blob {
    /// Every blob follows the same drift; only period and start offset differ.
    fn drifting(class: &'static str, duration_ms: f64, delay_ms: f64) -> Self {
        let track = |frames: [f64; 5]| KeyframeLoop::new(frames.to_vec(), duration_ms).delay(delay_ms);
        Self { class, x: track(DRIFT_X), y: track(DRIFT_Y), scale: track(BREATHE) }
    }

    fn style(&self, t: f64) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) scale({:.3});",
            self.x.sample(t),
            self.y.sample(t),
            self.scale.sample(t)
        )
    }
}

fn blobs() -> Vec<Blob> {
    vec![
        Blob::drifting("blob blob-emerald", 18_000.0, 0.0),
        Blob::drifting("blob blob-teal", 22_000.0, 1_200.0),
        Blob::drifting("blob blob-cyan", 20_000.0, 600.0),
    ]
}

/// Slow drifting glow behind the hero. Static under reduced motion.
#[function_component(EnergyBlobs)]
pub fn energy_blobs() -> Html {
    let reduced_motion = use_reduced_motion();
    let blobs = use_memo(|_| blobs(), ());
    let streak = use_memo(|_| KeyframeLoop::new(vec![-5.0, 6.0, -3.0, 0.0], 26_000.0), ());
    let clock = use_mut_ref(|| 0.0_f64);
    let elapsed = use_state(|| 0.0_f64);

    {
        let elapsed = elapsed.clone();
        use_frame_loop(!reduced_motion, move |dt| {
            let now = {
                let mut clock = clock.borrow_mut();
                *clock += dt;
                *clock
            };
            elapsed.set(now);
        });
    }

    let t = *elapsed;
    html! {
        <div class="energy" aria-hidden="true">
            { for blobs.iter().map(|blob| html! {
                <div class={blob.class} style={blob.style(t)} />
            }) }
            <div class="energy-streak" style={format!("transform: translateX({:.2}%);", streak.sample(t))} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blobs_share_one_drift_at_their_own_pace() {
        for blob in blobs() {
            let (duration, delay) = match blob.class {
                "blob blob-emerald" => (18_000.0, 0.0),
                "blob blob-teal" => (22_000.0, 1_200.0),
                _ => (20_000.0, 600.0),
            };
            let quarter = delay + duration / 4.0;
            assert_eq!(blob.x.sample(quarter), 24.0);
            assert_eq!(blob.y.sample(quarter), -18.0);
            assert_eq!(blob.scale.sample(quarter), 1.08);
            assert_eq!(blob.x.sample(delay), 0.0);
        }
    }

    #[test]
    fn style_renders_the_resting_pose_before_motion() {
        let blob = Blob::drifting("blob", 18_000.0, 0.0);
        assert_eq!(blob.style(0.0), "transform: translate(0.0px, 0.0px) scale(1.000);");
    }
}
