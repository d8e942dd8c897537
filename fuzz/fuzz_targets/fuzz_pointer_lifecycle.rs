#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rangeslide_core::{Axis, DomainRange, PointerPosition, TrackGeometry};
use rangeslide_web::{ListenerCommand, PointerButton, SliderPointerAdapter, SliderPointerConfig};
use rangeslide_widgets::{CrossingPolicy, SliderConfig, ThumbId};

#[derive(Debug, Arbitrary)]
enum Signal {
    Down {
        high: bool,
        pointer_id: u8,
        button: i8,
        x: f32,
        y: f32,
    },
    Move {
        pointer_id: u8,
        x: f32,
        y: f32,
    },
    Up {
        pointer_id: u8,
        button: i8,
    },
    Cancel {
        pointer_id: Option<u8>,
    },
    Blur,
    Hidden,
    LostCapture {
        pointer_id: u8,
    },
    Push {
        high: bool,
        value: f32,
    },
}

#[derive(Debug, Arbitrary)]
struct Input {
    horizontal: bool,
    reverse: bool,
    allow_crossing: bool,
    length: u16,
    thumb_length: u16,
    domain_min: i16,
    domain_span: u16,
    signals: Vec<Signal>,
}

fn thumb(high: bool) -> ThumbId {
    if high { ThumbId::High } else { ThumbId::Low }
}

fn pos(x: f32, y: f32) -> PointerPosition {
    PointerPosition::new(f64::from(x), f64::from(y))
}

fuzz_target!(|input: Input| {
    let min = f64::from(input.domain_min);
    let max = min + f64::from(input.domain_span);
    let config = SliderConfig::default()
        .axis(if input.horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        })
        .reverse(input.reverse)
        .crossing(if input.allow_crossing {
            CrossingPolicy::Allow
        } else {
            CrossingPolicy::Prevent
        })
        .geometry(TrackGeometry::new(
            f64::from(input.length),
            f64::from(input.thumb_length),
        ))
        .domain(DomainRange::new(min, max))
        .values(min, max);
    let Ok(mut adapter) = SliderPointerAdapter::new(config, SliderPointerConfig::default()) else {
        return;
    };
    let mut attached = [false; 2];

    for signal in input.signals.into_iter().take(512) {
        let dispatches = match signal {
            Signal::Down {
                high,
                pointer_id,
                button,
                x,
                y,
            } => vec![adapter.pointer_down(
                thumb(high),
                u32::from(pointer_id),
                PointerButton::from_dom(i16::from(button)),
                pos(x, y),
            )],
            Signal::Move { pointer_id, x, y } => {
                vec![adapter.pointer_move(u32::from(pointer_id), pos(x, y))]
            }
            Signal::Up { pointer_id, button } => vec![adapter.pointer_up(
                u32::from(pointer_id),
                PointerButton::from_dom(i16::from(button)),
                pos(0.0, 0.0),
            )],
            Signal::Cancel { pointer_id } => adapter.pointer_cancel(pointer_id.map(u32::from)),
            Signal::Blur => adapter.blur(),
            Signal::Hidden => adapter.visibility_hidden(),
            Signal::LostCapture { pointer_id } => {
                vec![adapter.lost_pointer_capture(u32::from(pointer_id))]
            }
            Signal::Push { high, value } => {
                adapter
                    .slider_mut()
                    .set_value(thumb(high), f64::from(value));
                Vec::new()
            }
        };

        for dispatch in dispatches {
            match dispatch.listener_command {
                Some(ListenerCommand::Attach { thumb, .. }) => {
                    assert!(!attached[thumb.index()], "double attach");
                    attached[thumb.index()] = true;
                }
                Some(ListenerCommand::Detach { thumb, .. }) => {
                    assert!(attached[thumb.index()], "detach without attach");
                    attached[thumb.index()] = false;
                }
                None => {}
            }
        }

        // Post-conditions that must always hold:
        let slider = adapter.slider();
        let (low, high) = slider.values();
        assert!(slider.domain().contains(low), "low escaped domain");
        assert!(slider.domain().contains(high), "high escaped domain");
        if slider.crossing() == CrossingPolicy::Prevent {
            assert!(low <= high, "thumbs crossed");
        }
        for thumb in ThumbId::ALL {
            let expected = if attached[thumb.index()] { 2 } else { 0 };
            assert_eq!(slider.listener_count(thumb), expected, "listener leak");
        }
    }
});
