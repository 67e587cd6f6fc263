// Two readers on one SPI bus, driven from two threads.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::thread;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, InputPin, OutputPin};
use embedded_hal::spi::{ErrorType as SpiErrorType, SpiBus};
use libpn5180::transport::{SharedBus, SpiTransport, Transport};

#[derive(Default)]
struct Chip {
    selected: bool,
    clocked: bool,
}

#[derive(Default)]
struct Board {
    chips: [Chip; 2],
    writes: usize,
    overlaps: usize,
}

type SharedBoard = Arc<Mutex<Board>>;

struct Spi(SharedBoard);
struct Nss(SharedBoard, usize);
struct Busy(SharedBoard, usize);
struct Rst;
struct Delay;

impl SpiErrorType for Spi {
    type Error = Infallible;
}

impl SpiBus for Spi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
        self.clock();
        words.fill(0);
        Ok(())
    }
    fn write(&mut self, _words: &[u8]) -> Result<(), Infallible> {
        self.clock();
        Ok(())
    }
    fn transfer(&mut self, read: &mut [u8], _write: &[u8]) -> Result<(), Infallible> {
        self.read(read)
    }
    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
        self.read(words)
    }
    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl Spi {
    fn clock(&self) {
        let mut b = self.0.lock().unwrap();
        b.writes += 1;
        if b.chips.iter().filter(|c| c.selected).count() != 1 {
            b.overlaps += 1;
        }
        b.chips
            .iter_mut()
            .filter(|c| c.selected)
            .for_each(|c| c.clocked = true);
    }
}

impl PinErrorType for Nss {
    type Error = Infallible;
}

impl OutputPin for Nss {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut b = self.0.lock().unwrap();
        b.chips[self.1] = Chip {
            selected: true,
            clocked: false,
        };
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.lock().unwrap().chips[self.1].selected = false;
        Ok(())
    }
}

impl PinErrorType for Busy {
    type Error = Infallible;
}

impl InputPin for Busy {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        let b = self.0.lock().unwrap();
        let chip = &b.chips[self.1];
        Ok(chip.selected && chip.clocked)
    }
    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|h| !h)
    }
}

impl PinErrorType for Rst {
    type Error = Infallible;
}

impl OutputPin for Rst {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, _ns: u32) {
        thread::yield_now();
    }
}

#[test]
fn concurrent_readers_never_overlap_on_the_bus() {
    let board: SharedBoard = Arc::new(Mutex::new(Board::default()));
    let bus = SharedBus::new(Spi(board.clone()));

    let workers: Vec<_> = (0..2)
        .map(|id| {
            let mut t = SpiTransport::new(
                bus.clone(),
                Nss(board.clone(), id),
                Busy(board.clone(), id),
                Rst,
                Delay,
            );
            thread::spawn(move || {
                for _ in 0..50 {
                    t.transact(&[0x04, 0x02], 4).unwrap();
                    t.write(&[0x00, 0x03, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
                }
            })
        })
        .collect();

    for w in workers {
        w.join().unwrap();
    }

    let b = board.lock().unwrap();
    // 50 * (write + read + write) per reader
    assert_eq!(b.writes, 300);
    assert_eq!(b.overlaps, 0);
}
