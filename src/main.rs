use anyhow::Result;
use kdniao_track::{TrackClient, config::Config};
use tracing_subscriber::EnvFilter;

// Demo waybill from the vendor's API documentation.
const DEMO_CARRIER: &str = "YTO";
const DEMO_TRACKING_NUMBER: &str = "800338386116870005";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let mut args = std::env::args().skip(1);
    let carrier_code = args.next().unwrap_or_else(|| DEMO_CARRIER.to_string());
    let tracking_number = args
        .next()
        .unwrap_or_else(|| DEMO_TRACKING_NUMBER.to_string());

    let client = TrackClient::new(config)?;

    match client.query_traces(&carrier_code, &tracking_number).await? {
        Some(result) => {
            println!("用户ID: [{}]", result.business_id);
            println!("订单编号: [{}]", result.order_code);
            println!("快递公司: [{}]", result.carrier_code);
            println!("物流运单号: [{}]", result.tracking_number);
            println!("成功与否: [{}]", result.success);
            println!("失败原因: [{}]", result.reason);
            println!("物流状态: [{}]", result.state_label);

            for trace in &result.traces {
                println!("--------------------------------");
                println!("时间: [{}]", trace.accept_time);
                println!("描述: [{}]", trace.accept_station);
                println!("备注: [{}]", trace.remark);
            }
        }
        None => {
            println!("{} {} 没有查询到快递信息", carrier_code, tracking_number);
        }
    }

    Ok(())
}
