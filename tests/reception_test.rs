extern crate reception_map;

use reception_map::{read_receptions, Error, GeoPoint, Mode, Reception};

#[test]
fn reads_sides_and_skips_noise() {
    let log = "\
# header comment
44.25, -81.60 , 44.31,-81.40, extra

0,0,44.30,-81.45
";
    let receptions = read_receptions(log.as_bytes()).unwrap();
    assert_eq!(receptions, vec![
        Reception {
            transmitter: Some(GeoPoint::new(44.25, -81.60)),
            receiver: Some(GeoPoint::new(44.31, -81.40)),
        },
        Reception {
            transmitter: None,
            receiver: Some(GeoPoint::new(44.30, -81.45)),
        },
    ]);
}

#[test]
fn fixed_and_moving_sides_follow_mode() {
    let reception = Reception {
        transmitter: Some(GeoPoint::new(1., 2.)),
        receiver: Some(GeoPoint::new(3., 4.)),
    };

    assert_eq!(reception.fixed(Mode::ReceiverMoving), reception.transmitter);
    assert_eq!(reception.moving(Mode::ReceiverMoving), reception.receiver);
    assert_eq!(reception.fixed(Mode::TransmitterMoving), reception.receiver);
    assert_eq!(reception.moving(Mode::TransmitterMoving), reception.transmitter);
}

#[test]
fn out_of_range_positions_are_kept() {
    let receptions = read_receptions("95,200,-91,-181\n".as_bytes()).unwrap();
    assert_eq!(receptions[0].transmitter, Some(GeoPoint::new(95., 200.)));
    assert!(!receptions[0].transmitter.unwrap().is_valid());
}

#[test]
fn missing_fields_report_the_line() {
    let log = "44.25,-81.60,44.31,-81.40\n44.25,-81.60\n";
    match read_receptions(log.as_bytes()) {
        Err(Error::MissingFields { line, found }) => {
            assert_eq!(line, 2);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn bad_numbers_report_line_and_column() {
    let log = "44.25,-81.60,44.31,-81.40\n44.25,-81.60,north,-81.40\n";
    let err = read_receptions(log.as_bytes()).unwrap_err();
    match &err {
        Error::InvalidNumber { line, column, text } => {
            assert_eq!(*line, 2);
            assert_eq!(*column, 3);
            assert_eq!(text, "north");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.to_string(), "line 2, column 3: \"north\" is not a number");
}

#[test]
fn message_text_with_quotes_does_not_swallow_lines() {
    let log = "\
44.2516,-81.6018,44.2703,-81.5512,\"HELLO
44.2516,-81.6018,44.3120,-81.4025,METAR X
44.2516,-81.6018,44.2950,-81.4803,METAR \"Y\"
";
    let receptions = read_receptions(log.as_bytes()).unwrap();
    assert_eq!(receptions.len(), 3);
    assert_eq!(receptions[2].receiver, Some(GeoPoint::new(44.2950, -81.4803)));
}

#[test]
fn whitespace_only_lines_are_skipped() {
    let log = "44.25,-81.60,44.31,-81.40\n   \n\t\n44.25,-81.60,44.30,-81.45\n";
    let receptions = read_receptions(log.as_bytes()).unwrap();
    assert_eq!(receptions.len(), 2);
}

#[test]
fn non_finite_coordinates_are_rejected() {
    for bad in &["+Inf", "inf", "NaN", "-inf"] {
        let log = format!("44.25,-81.60,{},-81.40\n", bad);
        match read_receptions(log.as_bytes()) {
            Err(Error::InvalidNumber { line, column, text }) => {
                assert_eq!(line, 1);
                assert_eq!(column, 3);
                assert_eq!(text, *bad);
            }
            other => panic!("unexpected result for {}: {:?}", bad, other),
        }
    }
}
