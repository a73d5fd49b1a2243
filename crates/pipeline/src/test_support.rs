use chrono::{TimeZone, Utc};

use crate::models::{Article, Category};

pub(crate) fn article(id: &str, title: &str, content: &str, category: Category) -> Article {
    let date = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
    Article::new(id, title, "Wire", date, content, category)
}

/// Twenty articles: two near-duplicate pairs and sixteen unrelated stories.
pub(crate) fn batch_with_two_duplicate_pairs() -> Vec<Article> {
    let unique = [
        ("Goldman Sachs posts record quarterly earnings", "Trading revenue lifted the investment bank to its best quarter in a decade."),
        ("Bitcoin ETF approval lifts crypto prices", "Spot funds drew heavy inflows as the cryptocurrency hit a fresh peak."),
        ("JPMorgan raises dividend after stress test", "The lender passed the central bank review and plans a larger payout."),
        ("Nasdaq closes at all-time high", "Chipmakers led a broad advance across the technology heavy index."),
        ("Private equity fundraising slows sharply", "Buyout firms are struggling to return capital to pension investors."),
        ("Unemployment ticks up in latest jobs report", "Hiring cooled in services while manufacturing payrolls were flat."),
        ("Retailer announces merger with rival chain", "The all-stock deal would create the largest grocer in the region."),
        ("Mortgage demand sinks as borrowing costs rise", "Applications for home loans fell to their lowest level since spring."),
        ("Hedge fund bets against regional lenders", "Short positions on small banks grew after weak deposit figures."),
        ("Consumer spending holds firm into summer", "Households kept buying travel and dining despite higher prices."),
        ("Automaker unveils restructuring plan", "Thousands of roles will be cut as the company retools its plants."),
        ("Treasury yields climb after auction", "Weak demand for ten year notes pushed borrowing costs higher."),
        ("Venture capital pours into battery startups", "Investors backed three energy storage firms with large rounds."),
        ("Central bank of Japan keeps policy steady", "Officials in Tokyo left short term rates unchanged at their meeting."),
        ("Chip designer files for stock market debut", "The listing could value the firm at more than forty billion."),
        ("Copper prices slip on weak factory data", "Metal traders cut positions after soft readings from China."),
    ];

    let mut batch: Vec<Article> = unique
        .iter()
        .enumerate()
        .map(|(i, (title, content))| {
            let category = Category::ALL[i % Category::ALL.len()];
            article(&format!("u{i}"), title, content, category)
        })
        .collect();

    let fed_body = "The Federal Reserve signalled it could cut interest rates this year as inflation cools.";
    batch.insert(3, article("fed-a", "Fed Signals Rate Cuts", fed_body, Category::Finance));
    batch.insert(
        9,
        article(
            "fed-b",
            "Fed Signals Rate Cuts Soon",
            "The Federal Reserve signalled it could cut interest rates later this year as inflation cools.",
            Category::Finance,
        ),
    );

    let oil_body = "Crude futures dropped for a third session as inventories swelled across the United States.";
    batch.insert(5, article("oil-a", "Oil Slides on Supply Glut", oil_body, Category::Markets));
    batch.push(article("oil-b", "Oil slides on supply glut", oil_body, Category::Markets));

    batch
}
