use criterion::{Criterion, black_box, criterion_group, criterion_main};
use roadtrip::app::services::roadtrip_parser::{RoadTripParser, SectionOffsets};
use roadtrip::{ParserConfig, SectionName};

const FUEL_COLUMNS: &str = "Odometer (mi),Trip Distance,Date,Fill Amount,Fill Units,Price per Unit,Total Price,Partial Fill,MPG,Note,Octane,Location,Payment,Conditions,Reset,Categories,Flags,Currency Code,Currency Rate,Latitude,Longitude,ID,Trip Comp Fuel Economy,Trip Comp Avg. Speed,Trip Comp Temperature,Trip Comp Drive Time,Tank Number";

/// A backup with `fillups` fuel records and the other sections empty
fn synthetic_document(fillups: usize) -> Vec<u8> {
    let mut doc = String::from("ROAD TRIP CSV \",.\"\nVersion,Language\n1500,en\n\n");

    doc.push_str("VEHICLE\nName,Odometer,Units,Notes,Tank Capacity,Tank Units,Home Currency,Flags,IconID,FuelUnits,TripComp Units,TripComp Speed,TripComp Temperature,TripComp Time Enabled,Odometer Shift,Tank 1 Type,Tank 2 Type,Tank 2 Units\n");
    doc.push_str("Bench,0,mi,,18.0,gal,USD,,3,0,0,0,0,0,0\n\n");

    doc.push_str("FUEL RECORDS\n");
    doc.push_str(FUEL_COLUMNS);
    doc.push('\n');
    for i in 0..fillups {
        doc.push_str(&format!(
            "{},300,2024-01-01 08:00,10.5,gal,3.099,32.54,,28.5,\"note, {}\",87,Austin,Visa,,,,,0,1,30.2,-97.7,{},,,,,0\n",
            10_000 + i * 300,
            i,
            i
        ));
    }
    doc.push('\n');

    doc.push_str("MAINTENANCE RECORDS\nDescription,Date,Odometer (mi.),Cost,Note,Location,Type,Subtype,Payment,Categories,Reminder Interval,Reminder Distance,Flags,Currency Code,Currency Rate,Latitude,Longitude,ID,Notification Interval,Notification Distance\n\n");
    doc.push_str("ROAD TRIPS\nName,Start Date,Start Odometer (mi.),End Date,End Odometer,Note,Distance,ID,Type,Categories,Flags\n\n");
    doc.push_str("TIRE LOG\nName,Start Date,Start Odometer (mi.),Size,Size Correction,Distance,Age,Note,Flags,ID,ParentID\n\n");
    doc.push_str("VALUATIONS\nType,Date,Odometer,Price,Notes,Flags\n");

    doc.into_bytes()
}

fn bench_locate(c: &mut Criterion) {
    let document = synthetic_document(5_000);

    c.bench_function("locate_and_extract_all", |b| {
        b.iter(|| {
            let offsets = SectionOffsets::locate(black_box(&document));
            for section in SectionName::ALL {
                let _ = black_box(offsets.extract(&document, section));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let document = synthetic_document(5_000);
    let parser = RoadTripParser::new(ParserConfig::default());

    c.bench_function("parse_5000_fillups", |b| {
        b.iter(|| parser.parse_bytes(black_box(document.clone())))
    });
}

criterion_group!(benches, bench_locate, bench_parse);
criterion_main!(benches);
