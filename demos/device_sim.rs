//! Simulates a device driver delivering bursts into the channel while the
//! main thread drains fixed-size chunks. Ctrl-C stops the channel early.

use std::thread;
use std::time::Duration;

use bytechan::{ChannelBuilder, Status, DEFAULT_READ_CHUNK};

const DEVICE_ITERATIONS: usize = 5;
const DEVICE_BURST_SIZE: usize = 1024;
const DEVICE_DELAY: Duration = Duration::from_millis(100);
const POLL_TIMEOUT: Duration = Duration::from_millis(200);

fn main() {
    let channel = ChannelBuilder::new().build();

    {
        let channel = channel.clone();
        ctrlc::set_handler(move || {
            eprintln!("interrupted, stopping channel");
            channel.stop();
        })
        .expect("failed to install Ctrl-C handler");
    }

    let push = channel.make_producer().into_callback();
    let device = thread::spawn(move || {
        for i in 0..DEVICE_ITERATIONS {
            let burst = vec![i as u8; DEVICE_BURST_SIZE];
            match push(&burst) {
                Status::NoError => println!("device: pushed {} bytes", burst.len()),
                Status::BufferOverflow => eprintln!("device: burst {i} dropped, channel full"),
                status => {
                    eprintln!("device: giving up: {status:?}");
                    return;
                }
            }
            thread::sleep(DEVICE_DELAY);
        }
    });

    let mut total = 0usize;
    loop {
        // Once the device is done, accept whatever tail is left.
        let min_bytes = if device.is_finished() {
            if channel.size() == 0 {
                break;
            }
            1
        } else {
            DEFAULT_READ_CHUNK
        };

        let result = channel.drain(min_bytes, DEFAULT_READ_CHUNK, POLL_TIMEOUT);
        match result.status {
            Status::NoError => {
                total += result.data.len();
                println!("received {} bytes ({} buffered)", result.data.len(), result.buffer_size);
            }
            Status::Timeout => continue,
            Status::ControllerStopped => {
                total += result.data.len();
                break;
            }
            status => {
                eprintln!("drain failed: {status:?}");
                break;
            }
        }
    }

    channel.stop();
    device.join().expect("device thread panicked");

    println!("received {total} bytes in total");
}
