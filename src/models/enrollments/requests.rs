use super::entities::EnrollmentStatus;
use serde::Deserialize;
use ts_rs::TS;

// 学员报名请求（请求体可省略）
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollRequest {
    /// 分析用的实验分组标记
    #[serde(default)]
    pub experimental: bool,
}

// 拒绝报名请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct DenyEnrollmentRequest {
    pub reason: Option<String>,
}

// 管理端报名列表查询参数
//
// status 支持逗号分隔的多个状态；缺省等价于全部四种状态。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct AdminEnrollmentQueryParams {
    pub status: Option<String>,
}

impl AdminEnrollmentQueryParams {
    pub fn parse_statuses(&self) -> Result<Vec<EnrollmentStatus>, String> {
        match &self.status {
            None => Ok(EnrollmentStatus::all().to_vec()),
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<EnrollmentStatus>())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_statuses_default() {
        let params = AdminEnrollmentQueryParams { status: None };
        assert_eq!(params.parse_statuses().unwrap().len(), 4);
    }

    #[test]
    fn test_parse_statuses_multi() {
        let params = AdminEnrollmentQueryParams {
            status: Some("pending, approved".to_string()),
        };
        assert_eq!(
            params.parse_statuses().unwrap(),
            vec![EnrollmentStatus::Pending, EnrollmentStatus::Approved]
        );
    }

    #[test]
    fn test_parse_statuses_invalid() {
        let params = AdminEnrollmentQueryParams {
            status: Some("pending,bogus".to_string()),
        };
        assert!(params.parse_statuses().is_err());
    }
}
