//! Canned response bodies shaped like paginated SOAP-style API pages.

/// One page with two company records, nested the way the real responses
/// nest them: envelope, response wrapper, then a record run.
pub fn companies_page_one() -> &'static str {
    r#"<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/">
  <env:Body>
    <wd:Get_Companies_Response xmlns:wd="urn:example.workitems">
      <wd:Response_Results>
        <wd:Total_Pages>2</wd:Total_Pages>
        <wd:Page>1</wd:Page>
      </wd:Response_Results>
      <wd:Response_Data>
        <wd:Company>
          <wd:Company_Data>
            <wd:Organization_Data>
              <wd:Organization_Name>Acme Holdings</wd:Organization_Name>
              <wd:ID>ORG-001</wd:ID>
            </wd:Organization_Data>
            <wd:Contact_Data>
              <wd:Address_Data Formatted_Address="123 Main St">
                <wd:Municipality>Springfield</wd:Municipality>
              </wd:Address_Data>
            </wd:Contact_Data>
            <wd:Tax_ID_Data>
              <wd:Tax_ID_Type_Reference>
                <wd:ID wd:type="WID">f81aa2</wd:ID>
                <wd:ID wd:type="Tax_ID_Type">US-EIN</wd:ID>
                <wd:ID wd:type="Legacy_ID">L-77</wd:ID>
              </wd:Tax_ID_Type_Reference>
            </wd:Tax_ID_Data>
          </wd:Company_Data>
        </wd:Company>
        <wd:Company>
          <wd:Company_Data>
            <wd:Organization_Data>
              <wd:Organization_Name>Globex Corporation</wd:Organization_Name>
              <wd:ID>ORG-002</wd:ID>
            </wd:Organization_Data>
            <wd:Tax_ID_Data>
              <wd:Tax_ID_Type_Reference>
                <wd:ID wd:type="Tax_ID_Type">CA-BN</wd:ID>
              </wd:Tax_ID_Type_Reference>
            </wd:Tax_ID_Data>
          </wd:Company_Data>
        </wd:Company>
      </wd:Response_Data>
    </wd:Get_Companies_Response>
  </env:Body>
</env:Envelope>"#
}

/// The second page: one more record, missing the address and tax data.
pub fn companies_page_two() -> &'static str {
    r#"<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/">
  <env:Body>
    <wd:Get_Companies_Response xmlns:wd="urn:example.workitems">
      <wd:Response_Results>
        <wd:Total_Pages>2</wd:Total_Pages>
        <wd:Page>2</wd:Page>
      </wd:Response_Results>
      <wd:Response_Data>
        <wd:Company>
          <wd:Company_Data>
            <wd:Organization_Data>
              <wd:Organization_Name>Initech LLC</wd:Organization_Name>
              <wd:ID>ORG-003</wd:ID>
            </wd:Organization_Data>
          </wd:Company_Data>
        </wd:Company>
      </wd:Response_Data>
    </wd:Get_Companies_Response>
  </env:Body>
</env:Envelope>"#
}

/// A page whose response data is present but holds no records at all.
pub fn empty_page() -> &'static str {
    r#"<env:Envelope xmlns:env="http://schemas.xmlsoap.org/soap/envelope/">
  <env:Body>
    <wd:Get_Companies_Response xmlns:wd="urn:example.workitems">
      <wd:Response_Data/>
    </wd:Get_Companies_Response>
  </env:Body>
</env:Envelope>"#
}
