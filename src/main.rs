/*!
 * Arena Heap Demo
 *
 * Drives the allocator through its full surface:
 * - allocate a region and write real bytes through it
 * - read the bytes back
 * - fragment the arena, then repair it with an explicit coalesce
 * - dump list state and a stats snapshot along the way
 */

use arena_heap::Heap;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut heap = Heap::new();

    println!("Initial state");
    print!("Allocated {}", heap.dump_allocated());
    print!("Free {}", heap.dump_free());

    let message = "MIDO LOVES MALOKY";
    match heap.allocate(message.len()) {
        Some(address) => {
            heap.write(address, message.as_bytes())?;
            let bytes = heap.read(address, message.len())?;
            println!("Allocated string: {}", String::from_utf8_lossy(&bytes));

            print!("Allocated {}", heap.dump_allocated());
            print!("Free {}", heap.dump_free());

            heap.release(address);

            println!("After release");
            print!("Allocated {}", heap.dump_allocated());
            print!("Free {}", heap.dump_free());
        }
        None => println!("Allocation failed."),
    }

    // Fragment the arena by releasing every other region, then repair it
    let regions: Vec<_> = (0..8).filter_map(|_| heap.allocate(1000)).collect();
    for address in regions.iter().skip(1).step_by(2) {
        heap.release(*address);
    }

    println!("After releasing alternate regions");
    print!("Free {}", heap.dump_free());

    heap.coalesce();
    println!("After coalesce");
    print!("Free {}", heap.dump_free());

    for address in regions.iter().step_by(2) {
        heap.release(*address);
    }
    heap.coalesce();

    println!("Final stats:");
    println!("{}", serde_json::to_string_pretty(&heap.stats())?);

    Ok(())
}
