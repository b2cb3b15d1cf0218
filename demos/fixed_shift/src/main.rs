//! fixed_shift — variant (i) of the stadium queue model.
//!
//! 100 agents spread across ten queues on a 10×10 grid.  Agents walk toward
//! column 0 and dequeue on arrival; every tick, any queue holding more than
//! 25 agents sheds its excess into the first queue with fewer than 10.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use sq_core::Tick;
use sq_core::SimConfig;
use sq_grid::MultiGrid;
use sq_model::{
    AgentStore, ExitRule, FixedShift, ModelObserver, QueueModelBuilder, TickStats,
};
use sq_output::{CsvWriter, ModelOutputObserver};
use sq_viz::{frame_handle, VizObserver, VizServer, VizServerConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 100;
const SEED: u64 = 42;
const TOTAL_TICKS: u64 = 200;
const TICK_INTERVAL_MS: u64 = 250; // browser replay speed

// ── Observer: viz frames + CSV rows from one snapshot pass ────────────────────

struct DemoObserver {
    viz: VizObserver,
    out: ModelOutputObserver<CsvWriter>,
}

impl ModelObserver for DemoObserver {
    fn on_snapshot(&mut self, tick: Tick, grid: &MultiGrid, agents: &AgentStore) {
        self.viz.on_snapshot(tick, grid, agents);
        self.out.on_snapshot(tick, grid, agents);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.viz.on_tick_end(tick, stats);
        self.out.on_tick_end(tick, stats);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.viz.on_sim_end(final_tick);
        self.out.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== fixed_shift — stadium queue model, variant (i) ===");
    println!("Agents: {AGENT_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!("Policy: excess over 25 moves to the first queue under 10; dequeue at exit");
    println!();

    // 1. Build the model.
    let config = SimConfig::ten_by_ten(AGENT_COUNT, TOTAL_TICKS, SEED);
    let mut model = QueueModelBuilder::new(config, FixedShift::default())
        .exit_rule(ExitRule::Dequeue)
        .build()?;

    // 2. Set up CSV output.
    std::fs::create_dir_all("output/fixed_shift")?;
    let writer = CsvWriter::new(Path::new("output/fixed_shift"))?;

    // 3. Shared frame slot + server on the model's usual port.
    let frame = frame_handle(model.grid.width(), model.grid.height());
    let server = VizServer::new(
        VizServerConfig::new().with_title("Stadium Queue Model — fixed shift"),
        Arc::clone(&frame),
    );

    // 4. Step the model on a background thread, one tick per interval.
    let sim = thread::spawn(move || {
        let mut obs = DemoObserver {
            viz: VizObserver::new(frame),
            out: ModelOutputObserver::new(writer),
        };
        for _ in 0..TOTAL_TICKS {
            if let Err(e) = model.run_ticks(1, &mut obs) {
                eprintln!("simulation error: {e}");
                return;
            }
            thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
        }
        obs.on_sim_end(model.current_tick());
        if let Some(e) = obs.out.take_error() {
            eprintln!("output error: {e}");
        }

        println!();
        println!("Run complete at {}", model.current_tick());
        println!("{:<8} {:<10}", "Queue", "Occupancy");
        println!("{}", "-".repeat(20));
        for col in 0..model.grid.width() {
            println!("{:<8} {:<10}", col, model.queue_len(col));
        }
        println!("Remaining on grid: {}", model.grid.placed_count());
    });

    // 5. Serve until interrupted.  The page keeps showing the final frame
    //    after the run ends.
    server.run()?;
    sim.join().ok();
    Ok(())
}
