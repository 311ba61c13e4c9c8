// demos/read_imu.rs
//
// Streams readings from an IMU on a host serial port.
//
//   cargo run --example read_imu --features std -- /dev/ttyACM0 57600

use imu9axis::transport::{SerialConfig, SerialPortTransport};
use imu9axis::{DataFormat, ImuError, SyncImuDriver};
use log::{error, info};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut config = SerialConfig::default();
    if let Some(port) = args.next() {
        config.port_name = port;
    }
    if let Some(baud) = args.next() {
        match baud.parse() {
            Ok(baud) => config.baud_rate = baud,
            Err(e) => {
                error!("invalid baud rate {:?}: {}", baud, e);
                std::process::exit(2);
            }
        }
    }

    let mut driver = SyncImuDriver::new(SerialPortTransport::new(config));
    if !driver.start_communication() {
        error!("could not open {}", driver.interface().config().port_name);
        std::process::exit(1);
    }

    let format = loop {
        match driver.check_data_format() {
            Ok(format) => break format,
            Err(ImuError::FormatUndetermined { attempts }) => {
                info!("no valid frame in {} reads, still probing", attempts);
            }
            Err(e) => {
                error!("format detection failed: {}", e);
                std::process::exit(1);
            }
        }
    };
    info!(
        "streaming {} frames",
        if format == DataFormat::Binary { "binary" } else { "ASCII" }
    );

    loop {
        if let Err(e) = driver.read_sensor_data() {
            error!("read failed: {}", e);
            std::thread::sleep(Duration::from_millis(100));
            continue;
        }
        if !driver.has_refreshed_imu_data() {
            continue;
        }

        let stamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        let raw = driver.imu_raw_data(stamp);
        let mag = driver.imu_mag(stamp);
        let temp = driver.imu_temperature();
        println!(
            "{:.3} [{}] gyro {:?} rad/s  acc {:?} m/s^2  mag {:?} T  temp {:.2} C",
            raw.stamp.as_secs_f64(),
            raw.frame_id,
            raw.angular_velocity.to_array(),
            raw.linear_acceleration.to_array(),
            mag.magnetic_field.to_array(),
            temp.temperature,
        );
    }
}
