/// INTERMAGNET conditions of use, written as `TermsOfUse` when none is given
pub const INTERMAGNET_TERMS_OF_USE: &str = concat!(
    "CONDITIONS OF USE FOR DATA PROVIDED THROUGH INTERMAGNET:\n",
    "The data made available through INTERMAGNET are provided for\n",
    "your use and are not for commercial use or sale or distribution\n",
    "to third parties without the written permission of the institute\n",
    "(http://www.intermagnet.org/Institutes_e.html) operating\n",
    "the observatory. Publications making use of the data\n",
    "should include an acknowledgment statement of the form given below.\n",
    "A citation reference should be sent to the INTERMAGNET Secretary\n",
    "(secretary@intermagnet.org) for inclusion in a publications list\n",
    "on the INTERMAGNET website.\n",
    "\n",
    "     ACKNOWLEDGEMENT OF DATA FROM OBSERVATORIES\n",
    "     PARTICIPATING IN INTERMAGNET\n",
    "We offer two acknowledgement templates. The first is for cases\n",
    "where data from many observatories have been used and it is not\n",
    "practical to list them all, or each of their operating institutes.\n",
    "The second is for cases where research results have been produced\n",
    "using a smaller set of observatories.\n",
    "\n",
    "     Suggested Acknowledgement Text (template 1)\n",
    "The results presented in this paper rely on data collected\n",
    "at magnetic observatories. We thank the national institutes that\n",
    "support them and INTERMAGNET for promoting high standards of\n",
    "magnetic observatory practice (www.intermagnet.org).\n",
    "\n",
    "     Suggested Acknowledgement Text (template 2)\n",
    "The results presented in this paper rely on the data\n",
    "collected at <observatory name>. We thank <institute name>,\n",
    "for supporting its operation and INTERMAGNET for promoting high\n",
    "standards of magnetic observatory practice (www.intermagnet.org).\n",
);
