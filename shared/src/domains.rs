use chrono::NaiveDate;
use serde::Serialize;

/// A ranked domain shown in the header cloud. `size` is the cloud weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedDomain {
    pub text: &'static str,
    pub size: u32,
    pub rank: u32,
}

impl RankedDomain {
    const fn new(text: &'static str, size: u32, rank: u32) -> Self {
        Self { text, size, rank }
    }
}

/// A term in the auxiliary keyword cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub text: &'static str,
    pub size: u32,
}

impl Keyword {
    const fn new(text: &'static str, size: u32) -> Self {
        Self { text, size }
    }
}

/// Snapshot date of the merged top list the header domains come from.
pub fn dataset_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap_or(NaiveDate::MIN)
}

pub fn dataset_source_label() -> String {
    format!("TrusList {} 实验数据", dataset_date().format("%Y-%m-%d"))
}

/// 75 domains from the 2025-08-15 merged top list.
pub const HEADER_DOMAINS: &[RankedDomain] = &[
    RankedDomain::new("microsoft.com", 50, 1),
    RankedDomain::new("qq.com", 48, 2),
    RankedDomain::new("baidu.com", 46, 3),
    RankedDomain::new("360.cn", 44, 4),
    RankedDomain::new("googleapis.com", 42, 5),
    RankedDomain::new("douyincdn.com", 40, 6),
    RankedDomain::new("apple.com", 38, 7),
    RankedDomain::new("google.com", 36, 8),
    RankedDomain::new("office.com", 34, 9),
    RankedDomain::new("beian.gov.cn", 32, 10),
    RankedDomain::new("mee.gov.cn", 30, 12),
    RankedDomain::new("gsxt.gov.cn", 28, 13),
    RankedDomain::new("live.com", 26, 27),
    RankedDomain::new("nsfc.gov.cn", 24, 28),
    RankedDomain::new("most.gov.cn", 22, 29),
    RankedDomain::new("court.gov.cn", 20, 30),
    RankedDomain::new("sh.gov.cn", 20, 31),
    RankedDomain::new("shanghai.gov.cn", 19, 32),
    RankedDomain::new("chinatax.gov.cn", 18, 33),
    RankedDomain::new("cma.gov.cn", 18, 34),
    RankedDomain::new("cnipa.gov.cn", 17, 35),
    RankedDomain::new("mof.gov.cn", 17, 36),
    RankedDomain::new("sz.gov.cn", 16, 37),
    RankedDomain::new("zj.gov.cn", 16, 38),
    RankedDomain::new("moa.gov.cn", 15, 39),
    RankedDomain::new("cq.gov.cn", 15, 40),
    RankedDomain::new("shandong.gov.cn", 14, 41),
    RankedDomain::new("tj.gov.cn", 14, 42),
    RankedDomain::new("fujian.gov.cn", 13, 44),
    RankedDomain::new("mohrss.gov.cn", 13, 45),
    RankedDomain::new("gansu.gov.cn", 12, 46),
    RankedDomain::new("hainan.gov.cn", 12, 47),
    RankedDomain::new("bing.com", 12, 64),
    RankedDomain::new("windows.com", 11, 66),
    RankedDomain::new("bilibili.com", 11, 67),
    RankedDomain::new("taobao.com", 10, 68),
    RankedDomain::new("jiangsu.gov.cn", 10, 69),
    RankedDomain::new("wps.cn", 10, 70),
    RankedDomain::new("beijing.gov.cn", 9, 77),
    RankedDomain::new("gd.gov.cn", 9, 80),
    RankedDomain::new("miit.gov.cn", 9, 81),
    RankedDomain::new("ustc.edu.cn", 8, 83),
    RankedDomain::new("tsinghua.edu.cn", 8, 84),
    RankedDomain::new("sjtu.edu.cn", 8, 85),
    RankedDomain::new("pku.edu.cn", 8, 88),
    RankedDomain::new("hicloud.com", 7, 90),
    RankedDomain::new("nju.edu.cn", 7, 95),
    RankedDomain::new("fudan.edu.cn", 7, 96),
    RankedDomain::new("zju.edu.cn", 7, 98),
    RankedDomain::new("sogou.com", 7, 100),
    RankedDomain::new("tencent.com", 6, 201),
    RankedDomain::new("163.com", 6, 206),
    RankedDomain::new("dingtalk.com", 6, 208),
    RankedDomain::new("douyin.com", 6, 247),
    RankedDomain::new("whu.edu.cn", 5, 101),
    RankedDomain::new("sysu.edu.cn", 5, 102),
    RankedDomain::new("ruc.edu.cn", 5, 103),
    RankedDomain::new("hust.edu.cn", 5, 104),
    RankedDomain::new("sdu.edu.cn", 5, 105),
    RankedDomain::new("bnu.edu.cn", 5, 106),
    RankedDomain::new("tju.edu.cn", 5, 107),
    RankedDomain::new("xmu.edu.cn", 5, 108),
    RankedDomain::new("buaa.edu.cn", 5, 109),
    RankedDomain::new("xjtu.edu.cn", 5, 110),
    RankedDomain::new("cau.edu.cn", 5, 111),
    RankedDomain::new("hit.edu.cn", 5, 112),
    RankedDomain::new("nankai.edu.cn", 5, 113),
    RankedDomain::new("cqu.edu.cn", 5, 114),
    RankedDomain::new("neu.edu.cn", 5, 115),
    RankedDomain::new("jlu.edu.cn", 5, 116),
    RankedDomain::new("bjtu.edu.cn", 5, 118),
    RankedDomain::new("lzu.edu.cn", 5, 119),
    RankedDomain::new("seu.edu.cn", 5, 120),
    RankedDomain::new("uestc.edu.cn", 5, 121),
    RankedDomain::new("dlut.edu.cn", 5, 122),
];

pub const KEYWORDS: &[Keyword] = &[
    Keyword::new("m.baidu.com", 60),
    Keyword::new("conn1.oppomobile.com", 44),
    Keyword::new("dns.weixin.qq.com.cn", 40),
    Keyword::new("vcode-od.vivo.com.cn", 36),
    Keyword::new("info.3g.qq.com", 32),
    Keyword::new("txmov6.a.yximgs.com", 30),
    Keyword::new("conn3.coloros.com", 28),
    Keyword::new("static.yximgs.com", 26),
    Keyword::new("p4.a.yximgs.com", 24),
    Keyword::new("apd-pcdnwxnat.teg.tencent-cloud.net", 22),
    Keyword::new("phishing", 20),
    Keyword::new("DGA", 18),
    Keyword::new("Registrar", 16),
    Keyword::new("TLD", 14),
    Keyword::new("Spearman", 12),
];

/// Look up a header domain by its exact text.
pub fn find_domain(text: &str) -> Option<&'static RankedDomain> {
    HEADER_DOMAINS.iter().find(|d| d.text == text)
}

#[cfg(test)]
mod tests {
    use super::{HEADER_DOMAINS, KEYWORDS, dataset_date, dataset_source_label, find_domain};
    use std::collections::HashSet;

    #[test]
    fn header_table_is_complete() {
        assert_eq!(HEADER_DOMAINS.len(), 75);
        assert_eq!(KEYWORDS.len(), 15);
    }

    #[test]
    fn header_domains_are_unique() {
        let unique: HashSet<_> = HEADER_DOMAINS.iter().map(|d| d.text).collect();
        assert_eq!(unique.len(), HEADER_DOMAINS.len());
    }

    #[test]
    fn weights_are_positive() {
        assert!(HEADER_DOMAINS.iter().all(|d| d.size > 0 && d.rank > 0));
        assert!(KEYWORDS.iter().all(|k| k.size > 0));
    }

    #[test]
    fn finds_domain_by_text() {
        let domain = find_domain("microsoft.com").unwrap();
        assert_eq!(domain.rank, 1);
        assert_eq!(domain.size, 50);
        assert_eq!(find_domain("dlut.edu.cn").map(|d| d.rank), Some(122));
        assert!(find_domain("example.org").is_none());
    }

    #[test]
    fn dataset_label_uses_snapshot_date() {
        assert_eq!(dataset_date().to_string(), "2025-08-15");
        assert_eq!(dataset_source_label(), "TrusList 2025-08-15 实验数据");
    }
}
